//! Deduplicated query tokens.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::query::QueryTokenizer;

/// The set of distinct search tokens derived from one query.
///
/// Iteration is in lexicographic order so that scoring, which folds over the
/// tokens, is deterministic.
///
/// # Examples
///
/// ```
/// use opfind::analysis::token_set::TokenSet;
///
/// let tokens = TokenSet::from_query("Res Res");
/// let texts: Vec<_> = tokens.iter().collect();
/// assert_eq!(texts, vec!["res", "res res"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        TokenSet::default()
    }

    /// Tokenize a query with the [`QueryTokenizer`].
    pub fn from_query(query: &str) -> Self {
        Self::from_stream(QueryTokenizer::new().tokenize(query))
    }

    /// Collect the text of every token in a stream, dropping empty tokens.
    pub fn from_stream(stream: TokenStream) -> Self {
        stream.map(|token| token.text).collect()
    }

    /// Insert a token. Empty tokens are ignored. Returns whether the set changed.
    pub fn insert<S: Into<String>>(&mut self, token: S) -> bool {
        let token = token.into();
        if token.is_empty() {
            return false;
        }
        self.tokens.insert(token)
    }

    /// Check whether the set holds the given token.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Iterate over the tokens in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokenize every member again and union the results.
    ///
    /// For a set produced by the [`QueryTokenizer`] this returns an equal set.
    pub fn retokenize(&self, tokenizer: &dyn Tokenizer) -> TokenSet {
        self.iter()
            .flat_map(|token| tokenizer.tokenize(token))
            .map(|token| token.text)
            .collect()
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.iter().map(|t| format!("{t:?}")).collect();
        write!(f, "[{}]", quoted.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_dedups() {
        let tokens = TokenSet::from_query("res");
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains("res"));
    }

    #[test]
    fn test_from_query_lowercases() {
        let tokens = TokenSet::from_query("Band Maths");
        let texts: Vec<_> = tokens.iter().collect();
        assert_eq!(texts, vec!["band", "band maths", "maths"]);
    }

    #[test]
    fn test_empty_query() {
        assert!(TokenSet::from_query("").is_empty());
    }

    #[test]
    fn test_insert_ignores_empty() {
        let mut tokens = TokenSet::new();
        assert!(!tokens.insert(""));
        assert!(tokens.insert("a"));
        assert!(!tokens.insert("a"));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_retokenize_is_identity() {
        let tokenizer = QueryTokenizer::new();
        let queries = [
            "",
            "res",
            "Terrain Correction",
            "s1..cal x",
            " ",
            "A.b C",
            "ΑΣ.Β",
            "ΟΔΟΣ ΣΑΣ",
        ];
        for query in queries {
            let tokens = TokenSet::from_query(query);
            assert_eq!(tokens.retokenize(&tokenizer), tokens, "query {query:?}");
        }
    }

    #[test]
    fn test_display() {
        let tokens = TokenSet::from_query("a b");
        assert_eq!(tokens.to_string(), r#"["a", "a b", "b"]"#);
    }
}
