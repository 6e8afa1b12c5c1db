//! Pretty URLs: `about.html` → `about/index.html`.

use std::path::Path;

use anyhow::Result;
use serde_json::Value as JsonValue;

use super::ResourceManipulator;
use crate::core::Priority;
use crate::sitemap::{MetadataSink, Resource};

/// Option key that opts a resource out of directory indexes.
pub const OPT_OUT_KEY: &str = "directory_indexes";

/// Moves each page into its own directory as the index file.
///
/// Only resources sharing the index file's extension are moved. Runs last so
/// it sees `directory_indexes = false` set by page rules.
#[derive(Debug, Clone)]
pub struct DirectoryIndexes {
    index_file: String,
}

impl DirectoryIndexes {
    pub fn new(index_file: impl Into<String>) -> Self {
        Self {
            index_file: index_file.into(),
        }
    }

    /// New path for `path`, or `None` when it stays put.
    fn rewrite(&self, path: &str) -> Option<String> {
        let extension = Path::new(&self.index_file).extension()?;
        let file_name = path.rsplit('/').next().unwrap_or(path);

        if file_name == self.index_file || Path::new(file_name).extension() != Some(extension) {
            return None;
        }

        let stem_len = path.len() - extension.len() - 1;
        Some(format!("{}/{}", &path[..stem_len], self.index_file))
    }
}

impl ResourceManipulator for DirectoryIndexes {
    fn name(&self) -> &'static str {
        "directory_indexes"
    }

    fn priority(&self) -> Priority {
        Priority::LAST
    }

    fn manipulate(&self, resources: &mut Vec<Resource>) -> Result<()> {
        for resource in resources.iter_mut() {
            if resource.option(OPT_OUT_KEY) == Some(&JsonValue::Bool(false)) {
                continue;
            }
            if let Some(path) = self.rewrite(resource.path()) {
                resource.set_path(path);
            }
        }
        Ok(())
    }
}
