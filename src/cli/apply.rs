//! Apply command implementation.
//!
//! Runs one manipulation pass over the resource list: page rules at the
//! routing slot, then directory indexes when enabled.

use anyhow::Result;

use super::args::ApplyArgs;
use super::common::{collect_resources, write_json};
use crate::config::SiteConfig;
use crate::pipeline::{DirectoryIndexes, Pipeline};
use crate::routing::Routing;
use crate::sitemap::Resource;
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute apply command
pub fn run_apply(args: &ApplyArgs, config: &SiteConfig) -> Result<()> {
    let resources = annotate_site(args, config)?;

    let resources: Vec<&Resource> = resources
        .iter()
        .filter(|r| !args.matched || r.is_matched())
        .collect();

    write_json(&resources, &args.output)
}

/// Build the pipeline from config and run it once.
fn annotate_site(args: &ApplyArgs, config: &SiteConfig) -> Result<Vec<Resource>> {
    let registry = config.build_registry()?;
    log!("routing"; "loaded {}", plural_count(registry.len(), "page rule"));

    let mut pipeline = Pipeline::new();
    pipeline.register(Routing::new(registry));

    let directory_indexes = args
        .directory_indexes
        .unwrap_or(config.site.directory_indexes);
    if directory_indexes {
        match config.site.index_file() {
            Some(index_file) => {
                pipeline.register(DirectoryIndexes::new(index_file));
            }
            None => log!("warning"; "directory indexes need `site.index-file`, skipping"),
        }
    }

    let resources = collect_resources(&args.paths, config)?;
    debug!("pipeline"; "{} manipulators", pipeline.len());
    pipeline.run(resources)
}
