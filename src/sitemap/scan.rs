//! Resource list discovery from source directories.

use std::path::{Component, Path, PathBuf};

use jwalk::WalkDir;

use super::Resource;
use crate::log;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect one resource per file under each source root.
///
/// Paths are relative to their root with `/` separators. The result is
/// sorted and deduplicated so that repeated scans yield the same list.
pub fn scan_sources(roots: &[PathBuf]) -> Vec<Resource> {
    let mut paths: Vec<String> = roots
        .iter()
        .filter(|root| root.is_dir())
        .flat_map(|root| collect_relative_files(root))
        .collect();

    paths.sort_unstable();
    paths.dedup();
    paths.into_iter().map(Resource::new).collect()
}

/// Build resources from explicit paths, keeping the given order.
pub fn resources_from_paths<S: AsRef<str>>(paths: &[S]) -> Vec<Resource> {
    paths
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .map(Resource::new)
        .collect()
}

fn collect_relative_files(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .filter_map(|e| {
            let path = e.path();
            let relative = path.strip_prefix(root).ok()?;
            let site_path = to_site_path(relative);
            if site_path.is_none() {
                log!("warning"; "skipping non-UTF-8 file name `{}`", path.display());
            }
            site_path
        })
        .collect()
}

/// Join path components with `/` regardless of platform.
///
/// Returns `None` when a component is not valid UTF-8.
fn to_site_path(relative: &Path) -> Option<String> {
    let parts = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
