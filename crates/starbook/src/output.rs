//! Colored terminal output utilities.

use console::{Style, Term};
use starbook_nav::SidebarEntry;

/// Marker printed before the current page.
const CURRENT_MARKER: &str = "▸ ";

/// Terminal output formatter.
///
/// Diagnostics go to stderr; command results go to stdout.
pub(crate) struct Output {
    term: Term,
    stdout: Term,
    yellow: Style,
    red: Style,
    bold: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            stdout: Term::stdout(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            bold: Style::new().bold(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a command result to stdout.
    pub(crate) fn data(&self, text: &str) {
        let _ = self.stdout.write_line(text);
    }

    /// Print a sidebar as an indented tree to stdout.
    pub(crate) fn sidebar(&self, entries: &[SidebarEntry]) {
        for line in self.sidebar_lines(entries, 0) {
            self.data(&line);
        }
    }

    /// Render sidebar entries into styled lines.
    fn sidebar_lines(&self, entries: &[SidebarEntry], depth: usize) -> Vec<String> {
        let indent = "  ".repeat(depth);
        let mut lines = Vec::new();

        for entry in entries {
            match entry {
                SidebarEntry::Page {
                    label,
                    href,
                    is_current,
                } => {
                    let href = self.dim.apply_to(href);
                    if *is_current {
                        let label = self.cyan_bold.apply_to(format!("{CURRENT_MARKER}{label}"));
                        lines.push(format!("{indent}{label}  {href}"));
                    } else {
                        lines.push(format!("{indent}  {label}  {href}"));
                    }
                }
                SidebarEntry::Category { label, entries } => {
                    let label = self.bold.apply_to(format!("{label}/"));
                    lines.push(format!("{indent}  {label}"));
                    lines.extend(self.sidebar_lines(entries, depth + 1));
                }
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain_output() -> Output {
        console::set_colors_enabled(false);
        Output::new()
    }

    #[test]
    fn test_sidebar_lines_nested() {
        let output = plain_output();
        let entries = vec![
            SidebarEntry::Page {
                label: "Home".to_owned(),
                href: "/".to_owned(),
                is_current: false,
            },
            SidebarEntry::Category {
                label: "guides".to_owned(),
                entries: vec![SidebarEntry::Page {
                    label: "Install".to_owned(),
                    href: "/guides/install/".to_owned(),
                    is_current: true,
                }],
            },
        ];

        let lines = output.sidebar_lines(&entries, 0);

        assert_eq!(
            lines,
            vec![
                "  Home  /".to_owned(),
                "  guides/".to_owned(),
                "  ▸ Install  /guides/install/".to_owned(),
            ]
        );
    }

    #[test]
    fn test_sidebar_lines_empty() {
        let output = plain_output();

        assert!(output.sidebar_lines(&[], 0).is_empty());
    }
}
