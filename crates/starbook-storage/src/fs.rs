//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading documents from the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use regex::Regex;

use crate::frontmatter;
use crate::slug::slug_from_id;
use crate::storage::{Document, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Default document patterns.
const DEFAULT_PATTERNS: [&str; 2] = ["**/*.md", "**/*.mdx"];

/// Filesystem storage implementation.
///
/// Scans a source directory recursively for content files. Entries of each
/// directory are visited in case-insensitive alphabetical order, which becomes
/// the navigation order. Titles come from frontmatter, then the first H1
/// heading, then the file name. Every scan reads the files afresh.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::path::PathBuf;
/// use starbook_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// let docs = storage.scan()?;
/// # Ok(())
/// # }
/// ```
pub struct FsStorage {
    /// Root directory for document storage.
    source_dir: PathBuf,
    /// Regex for extracting first H1 heading.
    h1_regex: Regex,
    /// Patterns selecting content files (e.g., "**/*.md").
    patterns: Vec<Pattern>,
}

impl FsStorage {
    /// Create a new filesystem storage with default patterns.
    ///
    /// Uses `**/*.md` and `**/*.mdx`.
    ///
    /// # Panics
    ///
    /// Panics if the internal H1 regex fails to compile.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        let patterns = DEFAULT_PATTERNS
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        Self::with_patterns(source_dir, patterns)
    }

    /// Create a new filesystem storage with custom content patterns.
    ///
    /// Patterns are matched against paths relative to `source_dir`.
    ///
    /// # Panics
    ///
    /// Panics if the internal H1 regex fails to compile.
    #[must_use]
    pub fn with_patterns(source_dir: PathBuf, patterns: Vec<Pattern>) -> Self {
        Self {
            source_dir,
            h1_regex: Regex::new(r"(?m)^#\s+(.+)$").expect("H1 regex is valid"),
            patterns,
        }
    }

    /// Root directory scanned by this storage.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Check whether a relative path is selected by the content patterns.
    fn is_content_file(&self, rel_path: &Path) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_path(rel_path))
    }

    /// Scan a subdirectory recursively, skipping it if unreadable.
    fn scan_directory(&self, dir_path: &Path, base_id: &str, documents: &mut Vec<Document>) {
        match fs::read_dir(dir_path) {
            Ok(entries) => self.scan_entries(entries, base_id, documents),
            Err(err) => {
                tracing::warn!(dir = %dir_path.display(), error = %err, "Skipping unreadable directory");
            }
        }
    }

    /// Collect documents from directory entries in case-insensitive name order.
    fn scan_entries(&self, entries: fs::ReadDir, base_id: &str, documents: &mut Vec<Document>) {
        // Cache file_type and the sort key to avoid repeated stat calls in sort.
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                let name = e.file_name().to_string_lossy().into_owned();
                let name_lower = name.to_lowercase();
                (e, is_dir, name, name_lower)
            })
            .collect();

        entries.sort_by(|(_, _, _, a), (_, _, _, b)| a.cmp(b));

        for (entry, is_dir, name, name_lower) in entries {
            // Skip hidden and underscore-prefixed files/dirs
            if name_lower.starts_with('.') || name_lower.starts_with('_') {
                continue;
            }

            if is_dir && matches!(name_lower.as_str(), "node_modules" | "target" | "dist" | "build")
            {
                continue;
            }

            let id = if base_id.is_empty() {
                name
            } else {
                format!("{base_id}/{name}")
            };

            if is_dir {
                self.scan_directory(&entry.path(), &id, documents);
            } else if self.is_content_file(Path::new(&id)) {
                documents.push(self.load_document(&entry.path(), id));
            }
        }
    }

    /// Build a document for a content file.
    fn load_document(&self, file_path: &Path, id: String) -> Document {
        let (title, slug) = self.extract(file_path, &id);
        Document { id, slug, title }
    }

    /// Resolve title and slug from file content.
    fn extract(&self, file_path: &Path, id: &str) -> (String, String) {
        let fallback_title = || Self::title_from_filename(id);

        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(id, error = %err, "Failed to read document, using file name");
                return (fallback_title(), slug_from_id(id));
            }
        };

        let (frontmatter, body) = match frontmatter::parse(&content) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(id, error = %err, "Invalid frontmatter, ignoring");
                (frontmatter::Frontmatter::default(), content.as_str())
            }
        };

        let title = frontmatter
            .title
            .or_else(|| self.title_from_heading(body))
            .unwrap_or_else(fallback_title);
        let slug = frontmatter
            .slug
            .map(|s| s.trim_matches('/').to_owned())
            .unwrap_or_else(|| slug_from_id(id));

        (title, slug)
    }

    /// Extract title from first H1 heading.
    fn title_from_heading(&self, body: &str) -> Option<String> {
        self.h1_regex
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_owned())
    }

    /// Generate title from the file name of an identifier.
    fn title_from_filename(id: &str) -> String {
        let name = id.rsplit_once('/').map_or(id, |(_, name)| name);
        let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);

        stem.replace(['-', '_'], " ")
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        if !self.source_dir.exists() {
            tracing::warn!(dir = %self.source_dir.display(), "Source directory does not exist");
            return Ok(Vec::new());
        }
        if !self.source_dir.is_dir() {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(&self.source_dir)
                .with_backend(BACKEND));
        }

        let entries = fs::read_dir(&self.source_dir).map_err(|e| {
            StorageError::io(e, Some(self.source_dir.clone())).with_backend(BACKEND)
        })?;

        let mut documents = Vec::new();
        self.scan_entries(entries, "", &mut documents);
        tracing::debug!(count = documents.len(), "Scanned documents");
        Ok(documents)
    }
}
