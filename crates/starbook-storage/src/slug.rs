//! Slug generation from document identifiers.

/// Lower-case a path segment and replace whitespace runs with `-`.
fn slugify_segment(segment: &str) -> String {
    segment
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Derive the output slug for a document identifier.
///
/// The file extension is dropped, each segment is slugified and a trailing
/// `index` segment collapses into its directory (`guides/index.md` becomes
/// `guides`). The site home page keeps the slug `index`.
///
/// # Examples
///
/// ```
/// use starbook_storage::slug_from_id;
///
/// assert_eq!(slug_from_id("en/Getting Started.md"), "en/getting-started");
/// assert_eq!(slug_from_id("guides/index.md"), "guides");
/// assert_eq!(slug_from_id("index.md"), "index");
/// ```
#[must_use]
pub fn slug_from_id(id: &str) -> String {
    let (dir, name) = id.rsplit_once('/').map_or(("", id), |(d, n)| (d, n));
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);

    let mut segments: Vec<String> = dir
        .split('/')
        .filter(|s| !s.is_empty())
        .map(slugify_segment)
        .collect();
    segments.push(slugify_segment(stem));

    let slug = segments.join("/");
    match slug.strip_suffix("/index") {
        Some(parent) => parent.to_owned(),
        None => slug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_strips_extension() {
        assert_eq!(slug_from_id("guide.md"), "guide");
        assert_eq!(slug_from_id("guide.mdx"), "guide");
    }

    #[test]
    fn test_slug_keeps_directories() {
        assert_eq!(slug_from_id("en/guides/install.md"), "en/guides/install");
    }

    #[test]
    fn test_slug_lowercases_and_dashes() {
        assert_eq!(slug_from_id("Guides/Quick  Start.md"), "guides/quick-start");
    }

    #[test]
    fn test_slug_nested_index_collapses() {
        assert_eq!(slug_from_id("fr/index.md"), "fr");
        assert_eq!(slug_from_id("guides/setup/index.md"), "guides/setup");
    }

    #[test]
    fn test_slug_root_index_kept() {
        assert_eq!(slug_from_id("index.md"), "index");
    }

    #[test]
    fn test_slug_without_extension() {
        assert_eq!(slug_from_id("guides/README"), "guides/readme");
    }

    #[test]
    fn test_slug_dotted_name_strips_last_extension_only() {
        assert_eq!(slug_from_id("v1.2.md"), "v1.2");
    }
}
