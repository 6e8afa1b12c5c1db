//! Sitemap: the resource list that manipulators work on.

mod resource;
mod scan;

pub use resource::{MetadataSink, Resource};
pub use scan::{resources_from_paths, scan_sources};
