//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::sync::RwLock;

use crate::slug::slug_from_id;
use crate::storage::{Document, Storage, StorageError};

/// Mock storage for testing.
///
/// Stores documents in memory. Documents are returned by
/// [`Storage::scan`] in the order they were added.
///
/// # Example
///
/// ```ignore
/// use starbook_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_document("guide.md", "User Guide")
///     .with_document("guides/index.md", "Guides");
///
/// let docs = storage.scan().unwrap();
/// assert_eq!(docs[0].slug, "guide");
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    documents: RwLock<Vec<Document>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given identifier and title.
    ///
    /// The slug is derived from the identifier the same way the filesystem
    /// backend derives it.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        let slug = slug_from_id(&id);
        self.with_slug_document(id, slug, title)
    }

    /// Add a document with an explicit slug.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_slug_document(
        self,
        id: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.documents
            .write()
            .unwrap()
            .push(Document::new(id, slug, title));
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        Ok(self.documents.read().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty() {
        let storage = MockStorage::new();

        let docs = storage.scan().unwrap();

        assert!(docs.is_empty());
    }

    #[test]
    fn test_scan_preserves_insertion_order() {
        let storage = MockStorage::new()
            .with_document("zeta.md", "Zeta")
            .with_document("guides/a.md", "A")
            .with_document("alpha.md", "Alpha");

        let docs = storage.scan().unwrap();

        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta.md", "guides/a.md", "alpha.md"]);
    }

    #[test]
    fn test_with_document_derives_slug() {
        let storage = MockStorage::new().with_document("fr/guides/index.md", "Guides");

        let docs = storage.scan().unwrap();

        assert_eq!(docs[0].slug, "fr/guides");
        assert_eq!(docs[0].title, "Guides");
    }

    #[test]
    fn test_with_slug_document_keeps_slug() {
        let storage = MockStorage::new().with_slug_document("guide.md", "custom", "Guide");

        let docs = storage.scan().unwrap();

        assert_eq!(docs[0].slug, "custom");
    }
}
