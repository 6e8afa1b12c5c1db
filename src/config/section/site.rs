//! `[site]` section: where sources live and how directories resolve.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteSectionConfig {
    /// File name used for directory paths (`/docs/` → `/docs/index.html`).
    /// Empty disables directory expansion; such rules fail to register.
    pub index_file: String,
    /// Source directories, relative to the config file.
    pub source: Vec<PathBuf>,
    /// Move `foo.html` to `foo/index.html` after page rules are applied.
    pub directory_indexes: bool,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            index_file: "index.html".to_string(),
            source: vec![PathBuf::from("source")],
            directory_indexes: false,
        }
    }
}

impl SiteSectionConfig {
    /// Configured index file, `None` when unset.
    pub fn index_file(&self) -> Option<&str> {
        Some(self.index_file.as_str()).filter(|name| !name.is_empty())
    }
}
