//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::OutputArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::sitemap::{Resource, resources_from_paths, scan_sources};
use crate::utils::plural_count;

/// Collect resources based on CLI paths
///
/// - no paths: scan the configured source directories
/// - `-`: read one path per line from stdin
/// - otherwise: the given paths, in order
pub fn collect_resources(paths: &[String], config: &SiteConfig) -> Result<Vec<Resource>> {
    if paths.len() == 1 && paths[0] == "-" {
        let stdin = io::stdin();
        return read_paths(stdin.lock()).map(|paths| resources_from_paths(&paths));
    }

    if paths.is_empty() {
        let resources = scan_sources(&config.site.source);
        log!("scan"; "found {}", plural_count(resources.len(), "resource"));
        return Ok(resources);
    }

    Ok(resources_from_paths(paths))
}

/// Read newline-separated paths.
fn read_paths(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.context("failed to read paths from stdin"))
        .collect()
}

/// Serialize `value` as JSON to the output file or stdout.
pub fn write_json<T: Serialize>(value: &T, output: &OutputArgs) -> Result<()> {
    let formatted = if output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(ref path) = output.output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("failed to create `{}`", path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("output"; "wrote {}", path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
