//! Metadata bundle attached to resources by page rules.

use serde::{Deserialize, Serialize};

use super::{JsonMap, deep_merge};

/// Metadata bundle carried by a rule and accumulated by a resource.
///
/// | Field     | Description                                                  |
/// |-----------|--------------------------------------------------------------|
/// | `options` | Opaque options for other extensions (`layout`, `directory_indexes`, ...) |
/// | `locals`  | Template-local variables                                     |
/// | `page`    | Page data, same shape as frontmatter but lower precedence    |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub options: JsonMap,
    pub locals: JsonMap,
    pub page: JsonMap,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no sub-map carries a key.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.locals.is_empty() && self.page.is_empty()
    }

    /// Merge another bundle into this one, field by field, last write wins.
    pub fn merge(&mut self, other: &Metadata) {
        deep_merge(&mut self.options, &other.options);
        deep_merge(&mut self.locals, &other.locals);
        deep_merge(&mut self.page, &other.page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_default_is_empty() {
        assert!(Metadata::default().is_empty());
    }

    #[test]
    fn test_merge_keeps_fields_apart() {
        let mut base = Metadata::new();
        base.options.insert("layout".into(), json!("post"));

        let mut overlay = Metadata::new();
        overlay.locals.insert("layout".into(), json!("local"));

        base.merge(&overlay);
        assert_eq!(base.options.get("layout"), Some(&json!("post")));
        assert_eq!(base.locals.get("layout"), Some(&json!("local")));
        assert!(base.page.is_empty());
    }

    #[test]
    fn test_metadata_serialize_shape() {
        let mut meta = Metadata::new();
        meta.page.insert("title".into(), json!("Home"));
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            value,
            json!({"options": {}, "locals": {}, "page": {"title": "Home"}})
        );
    }
}
