//! Source directory probe used for index file expansion.

use std::path::PathBuf;

use crate::utils::path::strip_leading_slash;

/// Reports whether a site path names a directory in the sources.
pub trait DirectoryProbe {
    /// `path` is canonical (see [`normalize_path`](crate::utils::path::normalize_path)).
    fn is_directory(&self, path: &str) -> bool;
}

/// Probe that never finds a directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDirectories;

impl DirectoryProbe for NoDirectories {
    fn is_directory(&self, _path: &str) -> bool {
        false
    }
}

/// Probe backed by the configured source directories.
#[derive(Debug, Clone, Default)]
pub struct SourceDirs {
    roots: Vec<PathBuf>,
}

impl SourceDirs {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl DirectoryProbe for SourceDirs {
    fn is_directory(&self, path: &str) -> bool {
        let relative = strip_leading_slash(path);
        self.roots.iter().any(|root| root.join(relative).is_dir())
    }
}

impl<F> DirectoryProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_directory(&self, path: &str) -> bool {
        self(path)
    }
}
