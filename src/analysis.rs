//! Text analysis for operator search.
//!
//! Queries and catalog names go through different tokenizers: the query side
//! produces a [`token_set::TokenSet`] of lowercase search tokens, the catalog
//! side splits operator names into the words a user is likely to type.

pub mod token;
pub mod token_set;
pub mod tokenizer;
