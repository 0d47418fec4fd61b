//! `starbook sidebar` command implementation.

use std::path::PathBuf;

use clap::Args;
use glob::Pattern;
use starbook_config::{CliSettings, Config, DocsConfig};
use starbook_nav::{LocaleSet, build_sidebar, count_pages, find_current};
use starbook_storage::{FsStorage, Storage};

use crate::error::CliError;
use crate::output::Output;

/// Slug the filesystem storage gives the root `index` page.
const HOME_SLUG: &str = "index";

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Slug of the page being viewed (e.g., "guides/install" or "fr/guides/install").
    /// "/" and "index" both select the home page.
    slug: String,

    /// Path to configuration file (default: auto-discover starbook.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Print the sidebar as JSON instead of a tree.
    #[arg(long)]
    json: bool,

    /// Enable verbose output (scan and filtering details).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, content patterns are invalid,
    /// or the source directory cannot be scanned.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Loaded configuration");

        let storage = storage_from_config(&config.docs_resolved)?;
        let documents = storage.scan()?;
        let locales = config.locale_keys().map(LocaleSet::new);

        let slug = normalize_slug(&self.slug);
        let sidebar = build_sidebar(&documents, slug, locales.as_ref());

        if self.verbose {
            output.info(&format!(
                "Source directory: {}",
                config.docs_resolved.source_dir.display()
            ));
            output.info(&format!(
                "Documents: {} scanned, {} in sidebar",
                documents.len(),
                count_pages(&sidebar)
            ));
        }

        if self.json {
            output.data(&serde_json::to_string_pretty(&sidebar)?);
        } else {
            output.sidebar(&sidebar);
        }

        if find_current(&sidebar).is_none() {
            output.warning(&format!("No page in the sidebar matches slug \"{slug}\""));
        }

        Ok(())
    }
}

/// Strip surrounding slashes; an empty slug is the home page.
fn normalize_slug(slug: &str) -> &str {
    match slug.trim_matches('/') {
        "" => HOME_SLUG,
        trimmed => trimmed,
    }
}

/// Build filesystem storage from resolved docs configuration.
fn storage_from_config(docs: &DocsConfig) -> Result<FsStorage, CliError> {
    if docs.patterns.is_empty() {
        return Ok(FsStorage::new(docs.source_dir.clone()));
    }

    let patterns = docs
        .patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| CliError::Validation(format!("Invalid docs pattern {p:?}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FsStorage::with_patterns(docs.source_dir.clone(), patterns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slug_maps_root_to_home() {
        assert_eq!(normalize_slug("/"), "index");
        assert_eq!(normalize_slug(""), "index");
        assert_eq!(normalize_slug("index"), "index");
        assert_eq!(normalize_slug("/fr/guides/"), "fr/guides");
    }

    #[test]
    fn test_root_slug_highlights_home_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("index.md"), "# Home").unwrap();
        std::fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let documents = storage.scan().unwrap();

        let sidebar = build_sidebar(&documents, normalize_slug("/"), None);

        let current = find_current(&sidebar).unwrap();
        assert_eq!(current.label(), "Home");
    }

    #[test]
    fn test_storage_from_config_default_patterns() {
        let docs = DocsConfig {
            source_dir: PathBuf::from("/docs"),
            patterns: Vec::new(),
        };

        let storage = storage_from_config(&docs).unwrap();

        assert_eq!(storage.source_dir(), PathBuf::from("/docs").as_path());
    }

    #[test]
    fn test_storage_from_config_invalid_pattern() {
        let docs = DocsConfig {
            source_dir: PathBuf::from("/docs"),
            patterns: vec!["**/[.md".to_owned()],
        };

        let err = storage_from_config(&docs).err().unwrap();

        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("**/[.md"));
    }

    #[test]
    fn test_execute_with_missing_config_file() {
        let args = SidebarArgs {
            slug: "guide".to_owned(),
            config: Some(PathBuf::from("/nonexistent/starbook.toml")),
            source_dir: None,
            json: false,
            verbose: false,
        };

        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_execute_with_config_and_locales() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs_dir = temp_dir.path().join("docs");
        std::fs::create_dir_all(docs_dir.join("fr")).unwrap();
        std::fs::write(docs_dir.join("index.md"), "# Home").unwrap();
        std::fs::write(docs_dir.join("fr").join("index.md"), "# Accueil").unwrap();
        let config_path = temp_dir.path().join("starbook.toml");
        std::fs::write(
            &config_path,
            "[locales.root]\nlabel = \"English\"\n\n[locales.fr]\nlabel = \"Français\"\n",
        )
        .unwrap();

        let args = SidebarArgs {
            slug: "/fr/".to_owned(),
            config: Some(config_path),
            source_dir: None,
            json: true,
            verbose: true,
        };

        assert!(args.execute().is_ok());
    }
}
