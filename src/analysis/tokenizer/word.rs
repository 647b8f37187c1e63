//! Word tokenizer implementation for operator names.
//!
//! Operator names mix separators and casing styles (`Terrain-Correction`,
//! `BandMaths`, `TOPSAR-Deburst`). This tokenizer cuts them into the words a
//! user would type.
//!
//! # Examples
//!
//! ```
//! use opfind::analysis::tokenizer::Tokenizer;
//! use opfind::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let words: Vec<_> = tokenizer.tokenize("TOPSAR-DeburstOp").map(|t| t.text).collect();
//! assert_eq!(words, vec!["topsar", "deburst", "op"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word run pattern is valid"));

/// A tokenizer that splits on non-alphanumeric characters and camelCase
/// boundaries, lowercasing every word.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Byte offsets (relative to `run`) where a new camelCase word starts.
    fn camel_boundaries(run: &str) -> Vec<usize> {
        let chars: Vec<(usize, char)> = run.char_indices().collect();
        let mut boundaries = vec![0];

        for i in 1..chars.len() {
            let prev = chars[i - 1].1;
            let cur = chars[i].1;
            let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());

            let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && cur.is_uppercase();
            let acronym_end = prev.is_uppercase() && cur.is_uppercase() && next_is_lower;

            if lower_to_upper || acronym_end {
                boundaries.push(chars[i].0);
            }
        }

        boundaries
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();

        for run in WORD_RUN.find_iter(text) {
            let boundaries = Self::camel_boundaries(run.as_str());
            for (i, &start) in boundaries.iter().enumerate() {
                let end = boundaries.get(i + 1).copied().unwrap_or(run.len());
                let position = tokens.len();
                tokens.push(Token::with_offsets(
                    run.as_str()[start..end].to_lowercase(),
                    position,
                    run.start() + start,
                    run.start() + end,
                ));
            }
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
