//! Document storage for Starbook.
//!
//! This crate provides a [`Storage`] trait for abstracting document scanning
//! from the underlying storage backend, so navigation logic can be tested
//! without touching the real filesystem.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Document`]: identifier, slug and title of one content file
//! - [`Storage`] trait with a single `scan()` method
//! - [`FsStorage`] implementation for filesystem backends
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use starbook_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for doc in storage.scan()? {
//!     println!("{} -> /{}/ ({})", doc.id, doc.slug, doc.title);
//! }
//! # Ok(())
//! # }
//! ```

mod frontmatter;
mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod slug;
mod storage;

pub use fs::FsStorage;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockStorage;
pub use slug::slug_from_id;
pub use storage::{Document, Storage, StorageError, StorageErrorKind};
