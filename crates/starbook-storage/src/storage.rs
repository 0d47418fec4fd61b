//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for abstracting document scanning,
//! along with [`StorageError`] for unified error handling across backends.
//!
//! # Identifier Convention
//!
//! Documents are addressed by their **identifier**: the slash-separated path of the
//! source file relative to the content root, extension included:
//! - `"index.md"` - site home page
//! - `"guides/install.md"` - nested page
//! - `"fr/guides/install.md"` - page inside a locale directory
//!
//! The identifier is stable across backends. The output location of a page is its
//! **slug** (`"guides/install"`), which may differ from the identifier.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Content document returned by storage scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Source identifier (e.g., "en/guides/install.md").
    pub id: String,
    /// Output slug (e.g., "en/guides/install"). Used for links and current page matching.
    pub slug: String,
    /// Document title (resolved: frontmatter title > H1 > filename).
    pub title: String,
}

impl Document {
    /// Create a document from its parts.
    #[must_use]
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
        }
    }

    /// File name component of the identifier (e.g., "install.md").
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.id.rsplit_once('/').map_or(&self.id, |(_, name)| name)
    }
}

/// Semantic error categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    kind: StorageErrorKind,
    path: Option<PathBuf>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }

    /// Path context, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Backend identifier, if any.
    #[must_use]
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut => StorageErrorKind::Timeout,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Timeout => "Timeout",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for document scanning.
///
/// Provides a unified interface for accessing documents regardless of backend.
/// Implementations handle backend-specific details like title extraction,
/// slug generation and scan order.
pub trait Storage: Send + Sync {
    /// Scan and return all documents.
    ///
    /// The returned order is significant: navigation is built in this order
    /// without re-sorting.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if scanning fails (e.g., permission denied).
    fn scan(&self) -> Result<Vec<Document>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("guides/install.md", "guides/install", "Install");

        assert_eq!(doc.id, "guides/install.md");
        assert_eq!(doc.slug, "guides/install");
        assert_eq!(doc.title, "Install");
    }

    #[test]
    fn test_document_file_name_nested() {
        let doc = Document::new("en/guides/install.md", "en/guides/install", "Install");

        assert_eq!(doc.file_name(), "install.md");
    }

    #[test]
    fn test_document_file_name_root() {
        let doc = Document::new("index.md", "index", "Home");

        assert_eq!(doc.file_name(), "index.md");
    }

    #[test]
    fn test_error_display_full() {
        let err = StorageError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            Some(PathBuf::from("/docs/guide.md")),
        )
        .with_backend("Fs");

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: no such file (path: /docs/guide.md)"
        );
    }

    #[test]
    fn test_error_display_kind_only() {
        let err = StorageError::new(StorageErrorKind::InvalidPath);

        assert_eq!(err.to_string(), "Invalid path");
    }

    #[test]
    fn test_io_error_maps_kind() {
        let err = StorageError::io(
            std::io::Error::new(std::io::ErrorKind::TimedOut, "slow disk"),
            None,
        );

        assert_eq!(err.kind(), StorageErrorKind::Timeout);
        assert!(err.path().is_none());
    }

    #[test]
    fn test_io_error_keeps_path_and_backend() {
        let err = StorageError::io(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            Some(PathBuf::from("/docs/private")),
        )
        .with_backend("Fs");

        assert_eq!(err.kind(), StorageErrorKind::PermissionDenied);
        assert_eq!(err.path(), Some(Path::new("/docs/private")));
        assert_eq!(err.backend(), Some("Fs"));
    }

    #[test]
    fn test_storage_as_trait_object() {
        struct Fixed;

        impl Storage for Fixed {
            fn scan(&self) -> Result<Vec<Document>, StorageError> {
                Ok(vec![Document::new("index.md", "index", "Home")])
            }
        }

        let storage: Box<dyn Storage> = Box::new(Fixed);

        assert_eq!(storage.scan().unwrap()[0].title, "Home");
    }

    #[test]
    fn test_error_source_is_exposed() {
        use std::error::Error as _;

        let err = StorageError::io(std::io::Error::other("boom"), None);

        assert!(err.source().is_some());
    }
}
