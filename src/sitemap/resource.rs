//! Output resources and the metadata sink contract.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::page::{JsonMap, Metadata};
use crate::utils::path::strip_leading_slash;

/// Something that accumulates metadata bundles.
///
/// The annotator calls `add_metadata` once per matching rule, in rule
/// registration order. How bundles combine is up to the implementor.
pub trait MetadataSink {
    /// Canonical path, without leading slash.
    fn path(&self) -> &str;

    /// Merge a bundle into the accumulated metadata.
    fn add_metadata(&mut self, bundle: &Metadata);
}

/// A single output artifact of the site.
///
/// Metadata merges with [`Metadata::merge`]: nested objects merge recursively
/// and any other value is overwritten, so the last bundle applied wins per key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    path: String,
    #[serde(flatten)]
    metadata: Metadata,
    /// Number of bundles applied, including empty ones.
    #[serde(skip)]
    matches: usize,
}

impl Resource {
    /// Create a resource; leading slashes are dropped from `path`.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: strip_leading_slash(path.as_ref()).to_string(),
            metadata: Metadata::default(),
            matches: 0,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn options(&self) -> &JsonMap {
        &self.metadata.options
    }

    pub fn locals(&self) -> &JsonMap {
        &self.metadata.locals
    }

    pub fn page_data(&self) -> &JsonMap {
        &self.metadata.page
    }

    /// Whether at least one rule matched, even one with an empty bundle.
    pub fn is_matched(&self) -> bool {
        self.matches > 0
    }

    /// Look up an option, e.g. `layout`.
    pub fn option(&self, key: &str) -> Option<&JsonValue> {
        self.metadata.options.get(key)
    }

    /// Move the resource to another path (leading slashes dropped).
    pub fn set_path(&mut self, path: impl AsRef<str>) {
        self.path = strip_leading_slash(path.as_ref()).to_string();
    }
}

impl MetadataSink for Resource {
    fn path(&self) -> &str {
        &self.path
    }

    fn add_metadata(&mut self, bundle: &Metadata) {
        self.metadata.merge(bundle);
        self.matches += 1;
    }
}
