//! Rules command: dump the registry as JSON.

use anyhow::Result;

use super::args::OutputArgs;
use super::common::write_json;
use crate::config::SiteConfig;

/// Execute rules command
pub fn run_rules(output: &OutputArgs, config: &SiteConfig) -> Result<()> {
    let registry = config.build_registry()?;
    write_json(&registry, output)
}
