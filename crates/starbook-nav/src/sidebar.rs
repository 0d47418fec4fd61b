//! Sidebar entries built from a directory tree.
//!
//! Documents become [`SidebarEntry::Page`] items and directories become
//! [`SidebarEntry::Category`] items labelled with the raw directory name.
//! Display formatting of labels is left to the renderer.
//!
//! # Example
//!
//! ```
//! use starbook_nav::{Document, LocaleSet, SidebarEntry, build_sidebar};
//!
//! let docs = vec![
//!     Document::new("fr/index.md", "fr", "Accueil"),
//!     Document::new("fr/guides/setup.md", "fr/guides/setup", "Installation"),
//!     Document::new("en/index.md", "en", "Home"),
//! ];
//! let locales = LocaleSet::new(["en", "fr"]);
//!
//! let sidebar = build_sidebar(&docs, "fr/guides/setup", Some(&locales));
//!
//! assert_eq!(sidebar.len(), 2);
//! assert_eq!(sidebar[0].label(), "Accueil");
//! assert!(matches!(&sidebar[1], SidebarEntry::Category { label, .. } if label == "guides"));
//! ```

use std::collections::HashMap;

use serde::Serialize;
use starbook_storage::Document;

use crate::locale::{LocaleSet, filter_by_locale, slug_to_locale};
use crate::slug::slug_to_pathname;
use crate::tree::{DirectoryTree, TreeNode, build_tree};

/// Entry of the navigation sidebar.
///
/// Serializes with a `type` tag (`"page"` or `"category"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarEntry {
    /// Link to a single document.
    Page {
        /// Document title.
        label: String,
        /// Output pathname (e.g., "/guides/setup/").
        href: String,
        /// True for the page currently being viewed.
        #[serde(rename = "isCurrent")]
        is_current: bool,
    },
    /// Group of entries from one directory.
    Category {
        /// Directory name.
        label: String,
        /// Child entries in discovery order.
        entries: Vec<SidebarEntry>,
    },
}

impl SidebarEntry {
    /// Display label of the entry.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Page { label, .. } | Self::Category { label, .. } => label,
        }
    }

    /// Check whether this entry is a page.
    #[must_use]
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page { .. })
    }

    /// Check whether this entry is a category.
    #[must_use]
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category { .. })
    }

    /// Check whether this entry is the page currently being viewed.
    #[must_use]
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { is_current: true, .. })
    }

    /// Child entries of a category; empty for pages.
    #[must_use]
    pub fn entries(&self) -> &[SidebarEntry] {
        match self {
            Self::Page { .. } => &[],
            Self::Category { entries, .. } => entries,
        }
    }
}

/// Find the page currently being viewed, searching depth-first.
#[must_use]
pub fn find_current(entries: &[SidebarEntry]) -> Option<&SidebarEntry> {
    entries.iter().find_map(|entry| {
        if entry.is_current() {
            Some(entry)
        } else {
            find_current(entry.entries())
        }
    })
}

/// Count page entries across the whole sidebar.
#[must_use]
pub fn count_pages(entries: &[SidebarEntry]) -> usize {
    entries
        .iter()
        .map(|entry| match entry {
            SidebarEntry::Page { .. } => 1,
            SidebarEntry::Category { entries, .. } => count_pages(entries),
        })
        .sum()
}

/// Converts tree nodes into sidebar entries.
struct SidebarBuilder<'a> {
    documents: HashMap<&'a str, &'a Document>,
    current_slug: &'a str,
}

impl<'a> SidebarBuilder<'a> {
    fn new(documents: &[&'a Document], current_slug: &'a str) -> Self {
        Self {
            documents: documents.iter().map(|doc| (doc.id.as_str(), *doc)).collect(),
            current_slug,
        }
    }

    fn entries(&self, tree: &DirectoryTree) -> Vec<SidebarEntry> {
        tree.iter()
            .map(|(name, node)| match node {
                TreeNode::Document(id) => self.page(id),
                TreeNode::Directory(dir) => SidebarEntry::Category {
                    label: name.to_owned(),
                    entries: self.entries(dir),
                },
            })
            .collect()
    }

    fn page(&self, id: &str) -> SidebarEntry {
        let Some(doc) = self.documents.get(id) else {
            panic!("sidebar tree references document {id:?} missing from the document list");
        };

        SidebarEntry::Page {
            label: doc.title.clone(),
            href: slug_to_pathname(&doc.slug),
            is_current: doc.slug == self.current_slug,
        }
    }
}

/// Convert a directory tree into sidebar entries.
///
/// The root tree's children become the top-level entries; there is no
/// wrapping root category.
///
/// # Panics
///
/// Panics if a tree leaf names a document that is not in `documents`. Trees
/// built by [`build_tree`] from the same list never do.
#[must_use]
pub fn to_sidebar(
    tree: &DirectoryTree,
    current_slug: &str,
    documents: &[&Document],
) -> Vec<SidebarEntry> {
    SidebarBuilder::new(documents, current_slug).entries(tree)
}

/// Build the sidebar for the page with slug `current_slug`.
///
/// Runs the whole pipeline: locale filtering, tree building and conversion.
/// When the current page is filtered out (e.g., its locale has no documents),
/// the sidebar is built without a current page.
#[must_use]
pub fn build_sidebar(
    documents: &[Document],
    current_slug: &str,
    locales: Option<&LocaleSet>,
) -> Vec<SidebarEntry> {
    let filtered = filter_by_locale(documents, current_slug, locales);
    let locale = slug_to_locale(current_slug, locales);
    let tree = build_tree(&filtered, locale);
    let sidebar = to_sidebar(&tree, current_slug, &filtered);

    tracing::debug!(
        total = documents.len(),
        filtered = filtered.len(),
        locale = locale.unwrap_or(""),
        current_slug,
        "Built sidebar"
    );

    sidebar
}
