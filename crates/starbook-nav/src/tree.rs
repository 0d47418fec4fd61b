//! Directory tree built from flat document identifiers.
//!
//! Each document is placed at the end of its breadcrumb, the chain of
//! directory names between the content root and the file. Directories are
//! created the first time a document needs them, so entries keep the order
//! in which the input list first mentions them.

use indexmap::IndexMap;
use indexmap::map::Entry;
use starbook_storage::Document;

/// Node of a [`DirectoryTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    /// Nested directory.
    Directory(DirectoryTree),
    /// Document leaf, holding the document identifier.
    Document(String),
}

/// Insertion-ordered mapping from path segment to directory or document.
///
/// Directory keys are directory names; document keys are file names
/// (extension included).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    entries: IndexMap<String, TreeNode>,
}

impl DirectoryTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a child node by segment name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.entries.get(name)
    }

    /// Iterate over child nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collect document identifiers of all leaves, depth-first in order.
    #[must_use]
    pub fn leaf_ids(&self) -> Vec<&str> {
        fn collect<'a>(tree: &'a DirectoryTree, ids: &mut Vec<&'a str>) {
            for node in tree.entries.values() {
                match node {
                    TreeNode::Document(id) => ids.push(id),
                    TreeNode::Directory(dir) => collect(dir, ids),
                }
            }
        }

        let mut ids = Vec::new();
        collect(self, &mut ids);
        ids
    }

    /// Insert a document identifier under `file_name` at the end of `breadcrumb`.
    ///
    /// Returns `false` when the path is blocked: a breadcrumb segment already
    /// names a document, or `file_name` is already taken at the final level.
    fn insert(&mut self, breadcrumb: &[&str], file_name: &str, id: &str) -> bool {
        let mut current = self;
        for segment in breadcrumb {
            let node = current
                .entries
                .entry((*segment).to_owned())
                .or_insert_with(|| TreeNode::Directory(DirectoryTree::new()));
            match node {
                TreeNode::Directory(dir) => current = dir,
                TreeNode::Document(existing) => {
                    tracing::warn!(
                        id,
                        segment,
                        existing = existing.as_str(),
                        "Directory name collides with a document, skipping"
                    );
                    return false;
                }
            }
        }

        match current.entries.entry(file_name.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(TreeNode::Document(id.to_owned()));
                true
            }
            Entry::Occupied(_) => {
                tracing::warn!(id, file_name, "Duplicate tree entry, skipping");
                false
            }
        }
    }
}

/// Compute the breadcrumb of a document identifier.
///
/// The breadcrumb is the list of directory segments before the file name.
/// A leading segment equal to `locale` is dropped, so locale directories do
/// not appear in navigation.
///
/// # Examples
///
/// ```
/// use starbook_nav::breadcrumb;
///
/// assert_eq!(breadcrumb("guides/sub/d.md", None), vec!["guides", "sub"]);
/// assert_eq!(breadcrumb("fr/guides/a.md", Some("fr")), vec!["guides"]);
/// assert!(breadcrumb("index.md", None).is_empty());
/// ```
#[must_use]
pub fn breadcrumb<'a>(id: &'a str, locale: Option<&str>) -> Vec<&'a str> {
    let Some((dir, _)) = id.rsplit_once('/') else {
        return Vec::new();
    };

    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    if locale.is_some() && segments.first().copied() == locale {
        segments.remove(0);
    }
    segments
}

/// Build a directory tree from a flat document list.
///
/// Documents are inserted in list order; no sorting takes place. `locale` is
/// the active locale whose directory is transparent in the tree.
#[must_use]
pub fn build_tree(documents: &[&Document], locale: Option<&str>) -> DirectoryTree {
    let mut root = DirectoryTree::new();
    for doc in documents {
        let crumbs = breadcrumb(&doc.id, locale);
        root.insert(&crumbs, doc.file_name(), &doc.id);
    }
    root
}
