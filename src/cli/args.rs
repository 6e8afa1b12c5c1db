//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Apply path-pattern page rules to a site's resources
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pagerule.toml)
    #[arg(short = 'C', long, default_value = "pagerule.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Annotate resources with page rule metadata
    #[command(visible_alias = "a")]
    Apply {
        #[command(flatten)]
        args: ApplyArgs,
    },

    /// List declared page rules in registration order
    #[command(visible_alias = "r")]
    Rules {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Apply command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Resource paths to annotate. If omitted, scans the source directories.
    /// Use `-` to read paths from stdin.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Move `foo.html` to `foo/index.html` after applying rules
    /// (overrides `site.directory-indexes`; `-d=false` disables)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub directory_indexes: Option<bool>,

    /// Only print resources that matched at least one rule
    #[arg(short, long)]
    pub matched: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Shared JSON output arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_apply() {
        let cli = Cli::try_parse_from(["pagerule", "apply", "index.html", "-p", "-d"]).unwrap();
        let Commands::Apply { args } = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.paths, vec!["index.html"]);
        assert!(args.output.pretty);
        assert_eq!(args.directory_indexes, Some(true));
        assert!(!args.matched);
    }

    #[test]
    fn test_directory_indexes_flag_leaves_paths_alone() {
        let cli = Cli::try_parse_from(["pagerule", "apply", "-d", "about.html"]).unwrap();
        let Commands::Apply { args } = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.paths, vec!["about.html"]);
        assert_eq!(args.directory_indexes, Some(true));
    }

    #[test]
    fn test_directory_indexes_explicit_value() {
        let cli =
            Cli::try_parse_from(["pagerule", "apply", "--directory-indexes=false", "a.html"])
                .unwrap();
        let Commands::Apply { args } = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.paths, vec!["a.html"]);
        assert_eq!(args.directory_indexes, Some(false));

        let cli = Cli::try_parse_from(["pagerule", "apply", "a.html"]).unwrap();
        let Commands::Apply { args } = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.directory_indexes, None);
    }

    #[test]
    fn test_parse_rules_with_global_flags() {
        let cli = Cli::try_parse_from(["pagerule", "-C", "site.toml", "rules", "-v"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Rules { .. }));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
