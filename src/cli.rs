//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::flatten::DEFAULT_MAX_DEPTH;

/// Documentation tree indexer
#[derive(Parser, Debug)]
#[command(name = "docdex")]
#[command(about = "Indexes a pre-generated documentation JSON tree into addressable, sortable views")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the documentation JSON document
    #[arg(long, env = "DOCDEX_DOCS", default_value = "docs.json", global = true)]
    pub docs: PathBuf,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Maximum package-nesting depth before a tree walk aborts
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    pub max_depth: usize,

    /// Show verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for docdex
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every package in the tree with its routable path
    #[command(visible_alias = "p")]
    Packages,

    /// List every module in the tree with its routable path
    #[command(visible_alias = "m")]
    Modules,

    /// Resolve a package path and show its contents
    #[command(visible_alias = "r")]
    Resolve(ResolveArgs),

    /// Aggregate per-package item listings
    Rollup(RollupArgs),

    /// Match packages and modules by name
    #[command(visible_alias = "s")]
    Search(SearchArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Slash-separated package path, e.g. "outer/inner"
    pub path: String,

    /// Show one module's classified items instead of the package overview
    #[arg(long)]
    pub module: Option<String>,
}

/// Arguments for the rollup command
#[derive(Args, Debug)]
pub struct RollupArgs {
    /// Package path to roll up; omitted rolls up every package
    pub path: Option<String>,

    /// Bucket size above which a module sorts below the small ones
    #[arg(long, default_value_t = crate::order::LARGE_SECTION_THRESHOLD)]
    pub large_section: usize,

    /// Visible items per module section; the rest is reported as a count
    #[arg(long, default_value_t = crate::order::SECTION_ITEM_CAP)]
    pub section_cap: usize,
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive name substring to match
    pub query: String,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default for terminal)
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON - machine parsing
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_resolve_with_global_flags() {
        let cli = Cli::try_parse_from([
            "docdex",
            "--docs",
            "tree.json",
            "--format",
            "json",
            "resolve",
            "outer/inner",
        ])
        .unwrap();

        assert_eq!(cli.docs, PathBuf::from("tree.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Resolve(args) => assert_eq!(args.path, "outer/inner"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn max_depth_defaults_and_overrides() {
        let cli = Cli::try_parse_from(["docdex", "packages"]).unwrap();
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);

        let cli = Cli::try_parse_from(["docdex", "--max-depth", "5", "modules"]).unwrap();
        assert_eq!(cli.max_depth, 5);
    }

    #[test]
    fn rollup_path_is_optional() {
        let cli = Cli::try_parse_from(["docdex", "rollup"]).unwrap();
        match cli.command {
            Commands::Rollup(args) => {
                assert!(args.path.is_none());
                assert_eq!(args.large_section, crate::order::LARGE_SECTION_THRESHOLD);
                assert_eq!(args.section_cap, crate::order::SECTION_ITEM_CAP);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
