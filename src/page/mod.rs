//! Page metadata: the bundle a rule attaches and how bundles merge.

mod merge;
mod metadata;
mod options;

pub use merge::deep_merge;
pub use metadata::Metadata;
pub use options::PageOptions;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
