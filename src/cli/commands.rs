//! Command implementations for the opfind CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::analysis::token_set::TokenSet;
use crate::catalog::Catalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::search::cursor::ResultCursor;
use crate::search::matcher::SubstringMatcher;
use crate::search::ranking::{RankedResults, ScoredMatch};

/// Execute a CLI command against stdin and stdout.
pub fn execute_command(args: OpfindArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_command_with(args, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn execute_command_with(
    args: OpfindArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args, &args, out),
        Command::Session(session_args) => session(session_args, &args, input, out),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, &args, out),
        Command::List(list_args) => list(list_args, &args, out),
    }
}

/// Load a catalog file, or the built-in catalog.
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            info!("Loading catalog from: {}", path.display());
            Catalog::from_path(path)?
        }
        None => Catalog::builtin()?,
    };
    if catalog.is_empty() {
        warn!("Catalog is empty, every search will return no results");
    }
    Ok(catalog)
}

/// Load the config file, if any, and apply command line overrides.
fn load_config(source: &SourceArgs) -> Result<SearchConfig> {
    let mut config = match &source.config {
        Some(path) => {
            info!("Loading search config from: {}", path.display());
            SearchConfig::from_path(path)?
        }
        None => SearchConfig::default(),
    };

    if source.limit.is_some() {
        config.limit = source.limit;
    }
    if source.min_score.is_some() {
        config.min_score = source.min_score;
    }
    config.validate()?;

    Ok(config)
}

fn build_ranker(source: &SourceArgs) -> Result<RankedResults> {
    let config = load_config(source)?;
    let ranker = RankedResults::new(config);
    Ok(match source.matcher {
        MatcherKind::Fuzzy => ranker,
        MatcherKind::Substring => ranker.with_matcher(SubstringMatcher::new()),
    })
}

fn search_results(
    query: &str,
    tokens: &TokenSet,
    matches: &[ScoredMatch<'_>],
    started: Instant,
) -> SearchResults {
    let hits = matches
        .iter()
        .enumerate()
        .map(|(i, m)| SearchHit {
            rank: i + 1,
            name: m.entry.name().to_string(),
            score: m.score,
            category: m.entry.category().map(str::to_string),
        })
        .collect::<Vec<_>>();

    SearchResults {
        query: query.to_string(),
        tokens: tokens.iter().map(str::to_string).collect(),
        total_hits: hits.len(),
        hits,
        duration_us: started.elapsed().as_micros() as u64,
        selected: None,
        show_scores: false,
    }
}

/// Rank the catalog against one query.
fn search(args: &SearchArgs, cli_args: &OpfindArgs, out: &mut dyn Write) -> Result<()> {
    let catalog = load_catalog(args.source.catalog.as_deref())?;
    let ranker = build_ranker(&args.source)?;

    let started = Instant::now();
    let tokens = ranker.tokenize(&args.query);
    let matches = ranker.rank(&args.query, &catalog);

    let mut results = search_results(&args.query, &tokens, &matches, started);
    results.show_scores = args.scores;

    output_result(
        &format!("Searched {} entries", catalog.len()),
        &results,
        cli_args,
        out,
    )
}

/// A line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionInput<'a> {
    Query(&'a str),
    Up,
    Down,
    Pick,
    Clear,
    Quit,
}

impl<'a> SessionInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":up" => SessionInput::Up,
            ":down" => SessionInput::Down,
            ":pick" => SessionInput::Pick,
            ":clear" => SessionInput::Clear,
            ":quit" | ":q" => SessionInput::Quit,
            _ => SessionInput::Query(line),
        }
    }
}

/// Interactive search: every plain line replaces the query and refreshes the
/// results, `:`-commands move or use the selection.
fn session(
    args: &SessionArgs,
    cli_args: &OpfindArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let catalog = load_catalog(args.source.catalog.as_deref())?;
    let ranker = build_ranker(&args.source)?;
    let mut cursor = ResultCursor::new();
    let mut last = SearchResults {
        query: String::new(),
        tokens: Vec::new(),
        hits: Vec::new(),
        total_hits: 0,
        duration_us: 0,
        selected: None,
        show_scores: cli_args.verbosity() > 1,
    };

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\n', '\r']);

        match SessionInput::parse(text) {
            SessionInput::Quit => break,
            SessionInput::Query(query) => {
                let started = Instant::now();
                let tokens = ranker.tokenize(query);
                let matches = ranker.rank(query, &catalog);
                cursor.update(matches.iter().map(|m| m.entry).collect());

                last = search_results(query, &tokens, &matches, started);
                last.show_scores = cli_args.verbosity() > 1;
            }
            SessionInput::Up => cursor.up(),
            SessionInput::Down => cursor.down(),
            SessionInput::Clear => {
                cursor.clear();
                last.clear();
            }
            SessionInput::Pick => {
                match cursor.pick() {
                    Some(entry) => {
                        let picked = PickedEntry {
                            picked: entry.name().to_string(),
                        };
                        output_result("", &picked, cli_args, out)?;
                    }
                    None => debug!("Nothing selected"),
                }
                last.clear();
                continue;
            }
        }

        last.selected = cursor.selected_index();
        output_result("", &last, cli_args, out)?;
        out.flush()?;
    }

    Ok(())
}

/// Show the token set of a query.
fn tokenize(args: &TokenizeArgs, cli_args: &OpfindArgs, out: &mut dyn Write) -> Result<()> {
    let tokens = TokenSet::from_query(&args.query);
    let result = TokenizeResult {
        query: args.query.clone(),
        tokens: tokens.iter().map(str::to_string).collect(),
    };
    output_result(&format!("{} tokens", tokens.len()), &result, cli_args, out)
}

/// List catalog entries in catalog order.
fn list(args: &ListArgs, cli_args: &OpfindArgs, out: &mut dyn Write) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let listing = CatalogListing {
        entries: catalog
            .iter()
            .map(|entry| ListedEntry {
                name: entry.name().to_string(),
                category: entry.category().map(str::to_string),
                description: entry.description().map(str::to_string),
                aliases: entry.aliases().to_vec(),
            })
            .collect(),
        long: args.long,
    };
    output_result(
        &format!("{} catalog entries", catalog.len()),
        &listing,
        cli_args,
        out,
    )
}
