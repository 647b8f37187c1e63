//! Command line argument parsing for the opfind CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// opfind - fuzzy search over a catalog of processing operators
#[derive(Parser, Debug, Clone)]
#[command(name = "opfind")]
#[command(about = "Search-as-you-type fuzzy lookup over a catalog of processing operators")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OpfindArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OpfindArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the catalog against a single query
    Search(SearchArgs),

    /// Interactive search: each stdin line refreshes the results
    Session(SessionArgs),

    /// Show how a query is tokenized
    Tokenize(TokenizeArgs),

    /// List catalog entries
    List(ListArgs),
}

/// Where the catalog and config come from.
#[derive(Parser, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Catalog file (JSON array of entries); the built-in catalog when omitted
    #[arg(short, long, value_name = "CATALOG_FILE", env = "OPFIND_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Search config file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "OPFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Matching strategy
    #[arg(short = 'm', long, default_value = "fuzzy")]
    pub matcher: MatcherKind,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Minimum score threshold for results
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Arguments for a one-shot search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Include scores in human output
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for an interactive session
#[derive(Parser, Debug, Clone)]
pub struct SessionArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for tokenizing a query
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for listing the catalog
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Catalog file (JSON array of entries); the built-in catalog when omitted
    #[arg(short, long, value_name = "CATALOG_FILE", env = "OPFIND_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Show categories and descriptions
    #[arg(long)]
    pub long: bool,
}

/// Matching strategies available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// Weighted prefix, word, alias and typo-tolerant matching
    #[default]
    Fuzzy,
    /// Plain substring containment
    Substring,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_search_command() {
        let args = OpfindArgs::try_parse_from([
            "opfind",
            "search",
            "terrain corr",
            "--limit",
            "5",
            "--scores",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.query, "terrain corr");
            assert_eq!(search_args.source.limit, Some(5));
            assert!(search_args.scores);
            assert_eq!(search_args.source.matcher, MatcherKind::Fuzzy);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_with_sources() {
        let args = OpfindArgs::try_parse_from([
            "opfind",
            "search",
            "res",
            "--catalog",
            "ops.json",
            "--config",
            "search.json",
            "--matcher",
            "substring",
            "--min-score",
            "2.5",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.source.catalog, Some(PathBuf::from("ops.json")));
            assert_eq!(search_args.source.config, Some(PathBuf::from("search.json")));
            assert_eq!(search_args.source.matcher, MatcherKind::Substring);
            assert_eq!(search_args.source.min_score, Some(2.5));
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = OpfindArgs::try_parse_from(["opfind", "list"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = OpfindArgs::try_parse_from(["opfind", "-vv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = OpfindArgs::try_parse_from(["opfind", "list", "-vvv"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = OpfindArgs::try_parse_from(["opfind", "--quiet", "-vv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = OpfindArgs::try_parse_from(["opfind", "--format", "json", "list"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);

        let args = OpfindArgs::try_parse_from(["opfind", "tokenize", "a.b", "-f", "csv"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Csv);
    }

    #[test]
    fn test_session_and_tokenize() {
        let args = OpfindArgs::try_parse_from(["opfind", "session", "--limit", "3"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Session(SessionArgs { source: SourceArgs { limit: Some(3), .. } })
        ));

        let args = OpfindArgs::try_parse_from(["opfind", "tokenize", "S1.Cal"]).unwrap();
        if let Command::Tokenize(tokenize_args) = args.command {
            assert_eq!(tokenize_args.query, "S1.Cal");
        } else {
            panic!("Expected Tokenize command");
        }
    }
}
