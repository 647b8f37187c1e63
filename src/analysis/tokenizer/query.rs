//! Query tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// Characters that separate query tokens.
pub const QUERY_DELIMITERS: [char; 2] = [' ', '.'];

/// Tokenizer for search-as-you-type input.
///
/// Lowercases the input, splits it on [`QUERY_DELIMITERS`] and drops empty
/// pieces. Offsets refer to the lowercased input. The whole lowercased input is emitted last as a
/// [`TokenKind::Whole`](crate::analysis::token::TokenKind::Whole) token so that
/// multi-word input can still match as a substring. The whole token is not
/// trimmed: `" "` produces a single `" "` token.
#[derive(Clone, Debug, Default)]
pub struct QueryTokenizer;

impl QueryTokenizer {
    /// Create a new query tokenizer.
    pub fn new() -> Self {
        QueryTokenizer
    }

    fn is_delimiter(c: char) -> bool {
        QUERY_DELIMITERS.contains(&c)
    }
}

impl Tokenizer for QueryTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        if text.is_empty() {
            return Box::new(std::iter::empty());
        }

        // Pieces are cut from the lowercased whole; a final sigma lowercases
        // differently in isolation.
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();
        let mut start = None;

        for (offset, c) in lowered.char_indices() {
            if Self::is_delimiter(c) {
                if let Some(begin) = start.take() {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(
                        &lowered[begin..offset],
                        position,
                        begin,
                        offset,
                    ));
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }

        if let Some(begin) = start {
            let position = tokens.len();
            tokens.push(Token::with_offsets(
                &lowered[begin..],
                position,
                begin,
                lowered.len(),
            ));
        }

        let position = tokens.len();
        let end = lowered.len();
        tokens.push(Token::with_offsets(lowered, position, 0, end).whole());

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "query"
    }
}
