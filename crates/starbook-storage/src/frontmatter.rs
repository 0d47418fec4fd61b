//! YAML frontmatter parsing.

use serde::Deserialize;

/// Fields read from a document's frontmatter block.
///
/// Unknown keys are ignored; the content schema is owned by the site.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Frontmatter {
    pub(crate) title: Option<String>,
    pub(crate) slug: Option<String>,
}

/// Split a leading `---` delimited block from the document body.
///
/// Returns `None` when the content does not start with a frontmatter fence
/// or the closing fence is missing.
fn split(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// Parse frontmatter from markdown content.
///
/// Returns the parsed frontmatter (default when absent) and the remaining body.
pub(crate) fn parse(content: &str) -> Result<(Frontmatter, &str), serde_yaml::Error> {
    let Some((yaml, body)) = split(content) else {
        return Ok((Frontmatter::default(), content));
    };

    if yaml.trim().is_empty() {
        return Ok((Frontmatter::default(), body));
    }

    let frontmatter = serde_yaml::from_str(yaml)?;
    Ok((frontmatter, body))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_without_frontmatter_returns_whole_body() {
        let (frontmatter, body) = parse("# Title\n\nText.").unwrap();

        assert_eq!(frontmatter, Frontmatter::default());
        assert_eq!(body, "# Title\n\nText.");
    }

    #[test]
    fn test_parse_title_and_slug() {
        let content = "---\ntitle: Getting Started\nslug: start\n---\n# Heading\n";

        let (frontmatter, body) = parse(content).unwrap();

        assert_eq!(frontmatter.title.as_deref(), Some("Getting Started"));
        assert_eq!(frontmatter.slug.as_deref(), Some("start"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let content = "---\ntitle: Guide\ndescription: Long text\nsidebar:\n  order: 2\n---\n";

        let (frontmatter, _) = parse(content).unwrap();

        assert_eq!(frontmatter.title.as_deref(), Some("Guide"));
        assert!(frontmatter.slug.is_none());
    }

    #[test]
    fn test_parse_empty_block() {
        let (frontmatter, body) = parse("---\n---\nBody").unwrap();

        assert_eq!(frontmatter, Frontmatter::default());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_crlf_fences() {
        let (frontmatter, body) = parse("---\r\ntitle: Windows\r\n---\r\nBody").unwrap();

        assert_eq!(frontmatter.title.as_deref(), Some("Windows"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_unclosed_fence_is_body() {
        let content = "---\ntitle: Broken\n";

        let (frontmatter, body) = parse(content).unwrap();

        assert_eq!(frontmatter, Frontmatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_parse_invalid_yaml_is_error() {
        let result = parse("---\ntitle: [unclosed\n---\n");

        assert!(result.is_err());
    }
}
