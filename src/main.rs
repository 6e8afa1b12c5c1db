//! Pagerule - apply path-pattern page rules to a static site.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use pagerule::cli::{self, Cli, Commands};
use pagerule::config::SiteConfig;
use pagerule::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let config = SiteConfig::load(&cwd, &cli.config)?;

    match &cli.command {
        Commands::Apply { args } => cli::run_apply(args, &config),
        Commands::Rules { output } => cli::run_rules(output, &config),
    }
}
