//! Scoring a catalog entry against query tokens.

use std::fmt::Debug;

use crate::analysis::token_set::TokenSet;
use crate::catalog::entry::{CatalogEntry, SearchFields};
use crate::config::{ScoringWeights, SearchConfig};
use crate::util::levenshtein::{prefix_distance_within, similarity};

/// Trait for scoring entries against a token set.
///
/// Implementations must be pure: the same entry and tokens always give the
/// same answer. `None` excludes the entry; `Some(score)` is non-negative and
/// higher means a better match.
pub trait Matcher: Send + Sync + Debug {
    /// Score an entry, or exclude it with `None`.
    fn score(&self, entry: &CatalogEntry, tokens: &TokenSet) -> Option<f64>;

    /// Get the name of this matcher (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Fraction of `target` covered by `token`, counted in characters.
fn coverage(token: &str, target: &str) -> f64 {
    let target_len = target.chars().count();
    if target_len == 0 {
        return 0.0;
    }
    (token.chars().count() as f64 / target_len as f64).min(1.0)
}

/// Weighted name, word, alias, category and description matching with typo
/// tolerance on name words.
///
/// Each token scores the best rule it satisfies; the entry score is the sum
/// over all tokens. An entry none of whose tokens score is excluded.
///
/// # Examples
///
/// ```
/// use opfind::analysis::token_set::TokenSet;
/// use opfind::catalog::entry::CatalogEntry;
/// use opfind::search::matcher::{FuzzyMatcher, Matcher};
///
/// let matcher = FuzzyMatcher::default();
/// let tokens = TokenSet::from_query("res");
///
/// assert!(matcher.score(&CatalogEntry::new("Resample"), &tokens).is_some());
/// assert!(matcher.score(&CatalogEntry::new("Subset"), &tokens).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: SearchConfig,
}

impl FuzzyMatcher {
    /// Create a matcher using the weights and edit budget of a config.
    pub fn new(config: SearchConfig) -> Self {
        FuzzyMatcher { config }
    }

    /// Get the config.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score of a single token against prepared entry fields.
    pub fn token_score(&self, fields: &SearchFields, token: &str) -> f64 {
        if token.trim().is_empty() {
            return 0.0;
        }

        let w: &ScoringWeights = &self.config.weights;
        let mut best: f64 = 0.0;

        if fields.name == token || fields.phrase == token {
            best = best.max(w.exact);
        } else if fields.name.starts_with(token) {
            best = best.max(w.prefix * coverage(token, &fields.name));
        } else if fields.phrase.starts_with(token) {
            best = best.max(w.prefix * coverage(token, &fields.phrase));
        }

        for word in &fields.words {
            if word.starts_with(token) {
                best = best.max(w.word_prefix * coverage(token, word));
            }
        }

        if fields.name.contains(token) {
            best = best.max(w.substring * coverage(token, &fields.name));
        }

        for alias in &fields.aliases {
            if alias.starts_with(token) {
                best = best.max(w.alias * coverage(token, alias));
            } else if alias.contains(token) {
                best = best.max(0.5 * w.alias * coverage(token, alias));
            }
        }

        if fields
            .category
            .as_deref()
            .is_some_and(|category| category.contains(token))
        {
            best = best.max(w.category);
        }

        if fields
            .description_words
            .iter()
            .any(|word| word.starts_with(token))
        {
            best = best.max(w.description);
        }

        let token_len = token.chars().count();
        if best == 0.0 && token_len >= self.config.min_fuzzy_len {
            for word in &fields.words {
                if let Some(distance) = prefix_distance_within(token, word, self.config.max_edits)
                {
                    best = best.max(w.fuzzy * similarity(distance, token_len));
                }
            }
        }

        best
    }
}

impl Matcher for FuzzyMatcher {
    fn score(&self, entry: &CatalogEntry, tokens: &TokenSet) -> Option<f64> {
        let fields = entry.fields();
        let total: f64 = tokens
            .iter()
            .map(|token| self.token_score(fields, token))
            .sum();

        (total > 0.0).then_some(total)
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}

/// Plain case-insensitive containment on the name, then the description.
///
/// Name hits score 2 per token and description hits 1, so name matches
/// always rank first.
#[derive(Debug, Clone, Default)]
pub struct SubstringMatcher;

impl SubstringMatcher {
    /// Create a new substring matcher.
    pub fn new() -> Self {
        SubstringMatcher
    }
}

impl Matcher for SubstringMatcher {
    fn score(&self, entry: &CatalogEntry, tokens: &TokenSet) -> Option<f64> {
        let fields = entry.fields();
        let description = entry.description().map(str::to_lowercase);

        let total: f64 = tokens
            .iter()
            .filter(|token| !token.trim().is_empty())
            .map(|token| {
                if fields.name.contains(token) {
                    2.0
                } else if description.as_deref().is_some_and(|d| d.contains(token)) {
                    1.0
                } else {
                    0.0
                }
            })
            .sum();

        (total > 0.0).then_some(total)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}
