//! Static content of the two About panels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutKind {
    Author,
    Software,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutPanel {
    pub title: String,
    pub heading: String,
    pub lines: Vec<String>,
}

/// Split a Cargo author entry like `Jane Doe <jane@example.com>`.
fn split_author(entry: &str) -> (&str, Option<&str>) {
    match entry.split_once('<') {
        Some((name, rest)) => {
            let email = rest.trim_end().trim_end_matches('>').trim();
            (name.trim(), Some(email).filter(|e| !e.is_empty()))
        }
        None => (entry.trim(), None),
    }
}

fn author_lines(authors: &str, homepage: &str, repository: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in authors.split(':').filter(|a| !a.trim().is_empty()) {
        let (name, email) = split_author(entry);
        lines.push(name.to_string());
        if let Some(email) = email {
            lines.push(format!("Email: {}", email));
        }
    }
    if !homepage.is_empty() {
        lines.push(format!("Website: {}", homepage));
    }
    if !repository.is_empty() {
        lines.push(format!("Source: {}", repository));
    }
    lines
}

pub fn about_panel(kind: AboutKind, app_name: &str) -> AboutPanel {
    match kind {
        AboutKind::Author => AboutPanel {
            title: "About Me".to_string(),
            heading: "Written by".to_string(),
            lines: author_lines(
                env!("CARGO_PKG_AUTHORS"),
                env!("CARGO_PKG_HOMEPAGE"),
                env!("CARGO_PKG_REPOSITORY"),
            ),
        },
        AboutKind::Software => {
            let mut lines = vec![
                format!("Version {}", env!("CARGO_PKG_VERSION")),
                env!("CARGO_PKG_DESCRIPTION").to_string(),
            ];
            let license = env!("CARGO_PKG_LICENSE");
            if !license.is_empty() {
                lines.push(format!("Licensed under {}", license));
            }
            lines.push("Built with Rust and FLTK".to_string());
            AboutPanel {
                title: "About Software".to_string(),
                heading: app_name.to_string(),
                lines,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_panel_lists_authors() {
        let panel = about_panel(AboutKind::Author, "SimplePad");
        assert_eq!(panel.title, "About Me");
        assert!(!panel.lines.is_empty());
        assert!(panel.lines.iter().all(|l| !l.is_empty()));
        assert!(panel.lines.iter().any(|l| l.starts_with("Email: ")));
        assert!(panel.lines.iter().any(|l| l.starts_with("Website: ")));
        assert!(panel.lines.iter().any(|l| l.starts_with("Source: ")));
    }

    #[test]
    fn test_author_lines_format() {
        let lines = author_lines("Jane Doe <jane@example.com>:Bob", "https://example.com", "");
        assert_eq!(
            lines,
            vec![
                "Jane Doe".to_string(),
                "Email: jane@example.com".to_string(),
                "Bob".to_string(),
                "Website: https://example.com".to_string(),
            ]
        );
    }

    #[test]
    fn test_split_author_without_email() {
        assert_eq!(split_author("  Solo Dev "), ("Solo Dev", None));
        assert_eq!(split_author("Empty <>"), ("Empty", None));
    }

    #[test]
    fn test_software_panel_has_version_and_name() {
        let panel = about_panel(AboutKind::Software, "SimplePad");
        assert_eq!(panel.heading, "SimplePad");
        assert!(panel.lines[0].starts_with("Version "));
        assert!(panel.lines[0].ends_with(env!("CARGO_PKG_VERSION")));
        assert!(panel.lines.iter().any(|l| l.contains("Apache-2.0")));
    }
}
