//! Locale detection and document filtering.
//!
//! Multilingual sites keep each language in a top-level directory named after
//! its locale key (`fr/guide.md`). The optional [`ROOT_LOCALE`] describes the
//! language served without a prefix, whose documents live at the top level
//! next to the other locales' directories.

use std::collections::BTreeSet;

use starbook_storage::Document;

/// Locale key for the unprefixed (default language) locale.
pub const ROOT_LOCALE: &str = "root";

/// Set of locale keys configured for a site.
///
/// Only key presence matters for navigation; locale settings such as labels
/// stay with the configuration layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleSet {
    keys: BTreeSet<String>,
}

impl LocaleSet {
    /// Create a locale set from keys.
    #[must_use]
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a key is configured.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Check whether the unprefixed root locale is configured.
    #[must_use]
    pub fn has_root(&self) -> bool {
        self.contains(ROOT_LOCALE)
    }

    /// Keys of locales that live under their own directory prefix.
    pub fn prefixed(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .map(String::as_str)
            .filter(|key| *key != ROOT_LOCALE)
    }

    /// Number of configured keys, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check whether no keys are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LocaleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Derive the locale of a slug.
///
/// Returns the first path segment when it is a configured non-root locale key,
/// `None` otherwise (the slug belongs to the root locale or the site has no
/// locales).
///
/// # Examples
///
/// ```
/// use starbook_nav::{LocaleSet, slug_to_locale};
///
/// let locales = LocaleSet::new(["root", "fr"]);
///
/// assert_eq!(slug_to_locale("fr/guides/setup", Some(&locales)), Some("fr"));
/// assert_eq!(slug_to_locale("guides/setup", Some(&locales)), None);
/// assert_eq!(slug_to_locale("fr/guides/setup", None), None);
/// ```
#[must_use]
pub fn slug_to_locale<'a>(slug: &'a str, locales: Option<&LocaleSet>) -> Option<&'a str> {
    let locales = locales?;
    let first = slug.split('/').next()?;
    (first != ROOT_LOCALE && locales.contains(first)).then_some(first)
}

/// Check whether a document identifier lives under a locale directory.
fn has_locale_prefix(id: &str, locale: &str) -> bool {
    id.strip_prefix(locale)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Narrow documents to those belonging to the current slug's locale.
///
/// - Without locales, every document is kept.
/// - When the current slug is in a prefixed locale, only documents under
///   that locale's directory are kept.
/// - Otherwise, when a root locale exists, documents under any prefixed
///   locale directory are dropped.
/// - Otherwise every document is kept.
///
/// Order is preserved. An empty result is valid.
#[must_use]
pub fn filter_by_locale<'a>(
    documents: &'a [Document],
    current_slug: &str,
    locales: Option<&LocaleSet>,
) -> Vec<&'a Document> {
    let Some(locale_set) = locales else {
        return documents.iter().collect();
    };

    if let Some(locale) = slug_to_locale(current_slug, locales) {
        return documents
            .iter()
            .filter(|doc| has_locale_prefix(&doc.id, locale))
            .collect();
    }

    if locale_set.has_root() {
        let prefixed: Vec<&str> = locale_set.prefixed().collect();
        return documents
            .iter()
            .filter(|doc| !prefixed.iter().any(|key| has_locale_prefix(&doc.id, key)))
            .collect();
    }

    documents.iter().collect()
}
