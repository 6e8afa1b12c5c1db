//! `[[page]]` entries: page rules declared in the config file.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::PageOptions;
use crate::routing::PatternSource;

/// One `[[page]]` table.
///
/// Exactly one of `path` (literal or glob) and `regex` must be given.
/// `locals` and `data` become template locals and page data; every other
/// key is an option.
///
/// ```toml
/// [[page]]
/// path = "/blog/*"
/// layout = "post"
/// locals = { featured = false }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(flatten)]
    pub options: PageOptions,
}

impl PageEntry {
    /// Resolve the declared pattern, recording problems in `diag`.
    ///
    /// `index` is the entry's position in the `[[page]]` array.
    pub fn pattern(&self, index: usize, diag: &mut ConfigDiagnostics) -> Option<PatternSource> {
        match (&self.path, &self.regex) {
            (Some(_), Some(_)) => {
                diag.error_with_hint(
                    FieldPath::indexed("page", index, "path"),
                    "both `path` and `regex` are set",
                    "keep one of them per [[page]] entry",
                );
                None
            }
            (None, None) => {
                diag.error_with_hint(
                    FieldPath::indexed("page", index, "path"),
                    "missing pattern",
                    "add `path = \"/about.html\"` or `regex = \"^/blog/\"`",
                );
                None
            }
            (Some(path), None) if path.trim().is_empty() => {
                diag.error(FieldPath::indexed("page", index, "path"), "pattern is empty");
                None
            }
            (Some(path), None) => Some(PatternSource::Path(path.clone())),
            (None, Some(regex)) if regex.is_empty() => {
                diag.error(FieldPath::indexed("page", index, "regex"), "pattern is empty");
                None
            }
            (None, Some(regex)) => match Regex::new(regex) {
                Ok(re) => Some(PatternSource::Regex(re)),
                Err(err) => {
                    diag.error(
                        FieldPath::indexed("page", index, "regex"),
                        format!("invalid regular expression: {err}"),
                    );
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::json;

    #[test]
    fn test_entry_fields_split() {
        let config = test_parse_config(
            r#"
[[page]]
path = "/about.html"
layout = false
directory_indexes = false
locals = { foo = "bar" }
data = { title = "About" }
"#,
        );
        let entry = &config.page[0];
        assert_eq!(entry.path.as_deref(), Some("/about.html"));
        assert!(entry.regex.is_none());

        let meta = entry.options.clone().into_metadata();
        assert_eq!(meta.options.get("layout"), Some(&json!(false)));
        assert_eq!(meta.options.get("directory_indexes"), Some(&json!(false)));
        assert!(!meta.options.contains_key("path"));
        assert_eq!(meta.locals.get("foo"), Some(&json!("bar")));
        assert_eq!(meta.page.get("title"), Some(&json!("About")));
    }

    #[test]
    fn test_pattern_sources() {
        let mut diag = ConfigDiagnostics::new();

        let literal = PageEntry {
            path: Some("/a.html".into()),
            ..Default::default()
        };
        assert!(matches!(literal.pattern(0, &mut diag), Some(PatternSource::Path(p)) if p == "/a.html"));

        let regex = PageEntry {
            regex: Some("^/blog/".into()),
            ..Default::default()
        };
        assert!(matches!(regex.pattern(1, &mut diag), Some(PatternSource::Regex(_))));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_regex_perl_classes_accepted() {
        let config = test_parse_config("[[page]]\nregex = '^/archive/\\d{4}/\\w+\\s?'\n");
        let mut diag = ConfigDiagnostics::new();

        let Some(PatternSource::Regex(regex)) = config.page[0].pattern(0, &mut diag) else {
            panic!("expected regex pattern, got {diag}");
        };
        assert!(diag.is_empty());
        assert!(regex.is_match("/archive/2024/post"));
        assert!(!regex.is_match("/archive/old/post"));
    }

    #[test]
    fn test_pattern_problems_reported() {
        let mut diag = ConfigDiagnostics::new();

        let both = PageEntry {
            path: Some("/a.html".into()),
            regex: Some("a".into()),
            ..Default::default()
        };
        let neither = PageEntry::default();
        let bad_regex = PageEntry {
            regex: Some("(unclosed".into()),
            ..Default::default()
        };
        let empty = PageEntry {
            path: Some("  ".into()),
            ..Default::default()
        };

        assert!(both.pattern(0, &mut diag).is_none());
        assert!(neither.pattern(1, &mut diag).is_none());
        assert!(bad_regex.pattern(2, &mut diag).is_none());
        assert!(empty.pattern(3, &mut diag).is_none());

        let fields: Vec<&str> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["page[0].path", "page[1].path", "page[2].regex", "page[3].path"]
        );
    }
}
