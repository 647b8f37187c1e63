//! Ranked result lists.
//!
//! # Examples
//!
//! ```
//! use opfind::catalog::entry::CatalogEntry;
//! use opfind::search::refresh;
//!
//! let catalog = vec![
//!     CatalogEntry::new("Resample"),
//!     CatalogEntry::new("Reproject"),
//!     CatalogEntry::new("Subset"),
//! ];
//!
//! let names: Vec<_> = refresh("res", &catalog).iter().map(|e| e.name()).collect();
//! assert_eq!(names, vec!["Resample"]);
//! ```

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::analysis::token_set::TokenSet;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::query::QueryTokenizer;
use crate::catalog::entry::CatalogEntry;
use crate::config::SearchConfig;
use crate::search::matcher::{FuzzyMatcher, Matcher};

/// An entry that matched, with its score and its position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    pub entry: &'a CatalogEntry,
    pub score: f64,
    pub position: usize,
}

/// Tokenizes queries, scores a catalog snapshot and orders the matches.
///
/// Ordering is by descending score; entries with equal scores keep their
/// catalog order.
pub struct RankedResults {
    tokenizer: Box<dyn Tokenizer>,
    matcher: Box<dyn Matcher>,
    config: SearchConfig,
}

impl RankedResults {
    /// Create a ranker with the query tokenizer and a fuzzy matcher built
    /// from `config`.
    pub fn new(config: SearchConfig) -> Self {
        RankedResults {
            tokenizer: Box::new(QueryTokenizer::new()),
            matcher: Box::new(FuzzyMatcher::new(config.clone())),
            config,
        }
    }

    /// Replace the matcher.
    pub fn with_matcher<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Get the config.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the matcher.
    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    /// Tokenize a query.
    pub fn tokenize(&self, query: &str) -> TokenSet {
        TokenSet::from_stream(self.tokenizer.tokenize(query))
    }

    /// Score every entry and return the matches in rank order.
    pub fn rank<'a, C>(&self, query: &str, catalog: &'a C) -> Vec<ScoredMatch<'a>>
    where
        C: AsRef<[CatalogEntry]> + ?Sized,
    {
        let tokens = self.tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let entries = catalog.as_ref();
        let mut matches: Vec<ScoredMatch<'a>> = entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                self.matcher
                    .score(entry, &tokens)
                    .map(|score| ScoredMatch {
                        entry,
                        score,
                        position,
                    })
            })
            .filter(|m| self.config.min_score.is_none_or(|floor| m.score >= floor))
            .collect();

        // `sort_by` is stable, so equal scores stay in catalog order.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));

        if let Some(limit) = self.config.limit {
            matches.truncate(limit);
        }

        debug!(
            "Query {:?} tokens {} matched {}/{} entries with {}",
            query,
            tokens,
            matches.len(),
            entries.len(),
            self.matcher.name()
        );

        matches
    }

    /// Return the matching entries in rank order, without scores.
    pub fn refresh<'a, C>(&self, query: &str, catalog: &'a C) -> Vec<&'a CatalogEntry>
    where
        C: AsRef<[CatalogEntry]> + ?Sized,
    {
        self.rank(query, catalog)
            .into_iter()
            .map(|m| m.entry)
            .collect()
    }
}

impl Default for RankedResults {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl fmt::Debug for RankedResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankedResults")
            .field("tokenizer", &self.tokenizer.name())
            .field("matcher", &self.matcher)
            .field("config", &self.config)
            .finish()
    }
}

/// Rank `catalog` against `query` with the default configuration.
pub fn refresh<'a, C>(query: &str, catalog: &'a C) -> Vec<&'a CatalogEntry>
where
    C: AsRef<[CatalogEntry]> + ?Sized,
{
    RankedResults::default().refresh(query, catalog)
}
