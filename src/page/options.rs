//! Options passed when declaring a page rule.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{JsonMap, Metadata};

/// Options for a page rule
///
/// # Known Fields
///
/// | Field    | Type      | Becomes           |
/// |----------|-----------|-------------------|
/// | `locals` | `JsonMap` | `Metadata.locals` |
/// | `data`   | `JsonMap` | `Metadata.page`   |
///
/// # Extension Fields (`extra`)
///
/// Any other key (`layout`, `directory_indexes`, ...) is kept as-is in
/// `Metadata.options` for other extensions to interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    /// Local variables available to the template when it renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locals: Option<JsonMap>,
    /// Page data. Frontmatter takes precedence over values set here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonMap>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an opaque option, e.g. `layout`.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Set a template local.
    pub fn local(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.locals
            .get_or_insert_with(JsonMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set a page data field.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.data
            .get_or_insert_with(JsonMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Split into a metadata bundle.
    pub fn into_metadata(self) -> Metadata {
        Metadata {
            options: self.extra,
            locals: self.locals.unwrap_or_default(),
            page: self.data.unwrap_or_default(),
        }
    }
}

impl From<PageOptions> for Metadata {
    fn from(options: PageOptions) -> Self {
        options.into_metadata()
    }
}
