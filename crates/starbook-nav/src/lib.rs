//! Sidebar navigation for Starbook.
//!
//! Turns the flat document list of a site into the sidebar shown next to a
//! page. The pipeline has two stages:
//!
//! 1. [`filter_by_locale`] keeps the documents of the current page's locale.
//! 2. [`build_tree`] groups the remaining documents by directory and
//!    [`to_sidebar`] converts the tree into [`SidebarEntry`] values, marking
//!    the current page.
//!
//! [`build_sidebar`] runs both stages. Everything is computed in memory from
//! the inputs of a single call; no state is kept between calls.
//!
//! # Quick Start
//!
//! ```
//! use starbook_nav::{Document, build_sidebar};
//!
//! let docs = vec![
//!     Document::new("index.md", "index", "Home"),
//!     Document::new("guides/install.md", "guides/install", "Install"),
//! ];
//!
//! let sidebar = build_sidebar(&docs, "guides/install", None);
//!
//! assert_eq!(sidebar[0].label(), "Home");
//! assert_eq!(sidebar[1].label(), "guides");
//! assert!(sidebar[1].entries()[0].is_current());
//! ```

mod locale;
mod sidebar;
mod slug;
mod tree;

pub use locale::{LocaleSet, ROOT_LOCALE, filter_by_locale, slug_to_locale};
pub use sidebar::{SidebarEntry, build_sidebar, count_pages, find_current, to_sidebar};
pub use slug::slug_to_pathname;
pub use tree::{DirectoryTree, TreeNode, breadcrumb, build_tree};

// Re-export Document from starbook-storage for convenience
pub use starbook_storage::Document;
