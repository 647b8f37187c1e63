//! Tokenizer implementations.
//!
//! # Available Tokenizers
//!
//! - [`query::QueryTokenizer`] - Splits search input on spaces and periods and
//!   adds the whole lowercased input
//! - [`word::WordTokenizer`] - Splits operator names into words, including
//!   camelCase boundaries
//!
//! # Examples
//!
//! ```
//! use opfind::analysis::tokenizer::Tokenizer;
//! use opfind::analysis::tokenizer::query::QueryTokenizer;
//!
//! let tokenizer = QueryTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Band.Maths").map(|t| t.text).collect();
//! assert_eq!(tokens, vec!["band", "maths", "band.maths"]);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization never fails; an input with nothing to keep yields an empty
/// stream. The trait requires `Send + Sync` so a tokenizer can live inside a
/// shared search engine.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use opfind::analysis::token::{Token, TokenStream};
/// use opfind::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> TokenStream {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .filter(|s| !s.is_empty())
///             .enumerate()
///             .map(|(i, s)| Token::new(s, i))
///             .collect();
///         Box::new(tokens.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod query;
pub mod word;

pub use query::QueryTokenizer;
pub use word::WordTokenizer;
