//! Search configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```
//! use opfind::config::SearchConfig;
//!
//! let config = SearchConfig::from_json_str(r#"{"limit": 5, "weights": {"fuzzy": 0.5}}"#).unwrap();
//! assert_eq!(config.limit, Some(5));
//! assert_eq!(config.weights.fuzzy, 0.5);
//! assert_eq!(config.weights.exact, SearchConfig::default().weights.exact);
//! ```

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{OpfindError, Result};

/// Weights applied by the fuzzy matcher to each kind of token hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Token equals the whole name.
    pub exact: f64,
    /// Name starts with the token.
    pub prefix: f64,
    /// A word of the name starts with the token.
    pub word_prefix: f64,
    /// Name contains the token.
    pub substring: f64,
    /// An alias starts with or contains the token.
    pub alias: f64,
    /// The category contains the token.
    pub category: f64,
    /// A description word starts with the token.
    pub description: f64,
    /// A name word is within the edit budget of the token.
    pub fuzzy: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            exact: 10.0,
            prefix: 8.0,
            word_prefix: 6.0,
            substring: 4.0,
            alias: 5.0,
            category: 1.5,
            description: 1.0,
            fuzzy: 2.0,
        }
    }
}

impl ScoringWeights {
    fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("exact", self.exact),
            ("prefix", self.prefix),
            ("word_prefix", self.word_prefix),
            ("substring", self.substring),
            ("alias", self.alias),
            ("category", self.category),
            ("description", self.description),
            ("fuzzy", self.fuzzy),
        ]
    }
}

/// Configuration for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Per-rule scoring weights.
    pub weights: ScoringWeights,
    /// Maximum edit distance tolerated by the typo rule.
    pub max_edits: usize,
    /// Tokens shorter than this (in characters) never match by typo.
    pub min_fuzzy_len: usize,
    /// Matches scoring below this are dropped.
    pub min_score: Option<f64>,
    /// Keep at most this many results.
    pub limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            weights: ScoringWeights::default(),
            max_edits: 1,
            min_fuzzy_len: 4,
            min_score: None,
            limit: None,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that weights and thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.weights.named() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(OpfindError::config(format!(
                    "weight {name} must be a finite non-negative number, got {weight}"
                )));
            }
        }

        if let Some(min_score) = self.min_score {
            if min_score.is_nan() {
                return Err(OpfindError::config("min_score must not be NaN"));
            }
        }

        if self.limit == Some(0) {
            warn!("limit is 0, every search will return no results");
        }

        Ok(())
    }
}
