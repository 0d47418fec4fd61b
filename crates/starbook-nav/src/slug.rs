//! Slug to URL conversion.

/// Convert a document slug to the pathname it is served at.
///
/// The home page slugs (`""` and `"index"`) map to `/`; every other slug is
/// wrapped in slashes.
///
/// # Examples
///
/// ```
/// use starbook_nav::slug_to_pathname;
///
/// assert_eq!(slug_to_pathname("guides/setup"), "/guides/setup/");
/// assert_eq!(slug_to_pathname("index"), "/");
/// ```
#[must_use]
pub fn slug_to_pathname(slug: &str) -> String {
    let slug = slug.trim_matches('/');
    if slug.is_empty() || slug == "index" {
        "/".to_owned()
    } else {
        format!("/{slug}/")
    }
}
