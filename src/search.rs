//! Search-as-you-type ranking over a catalog.
//!
//! - [`matcher`] scores one entry against a query's tokens
//! - [`ranking`] scores a whole catalog and orders the matches
//! - [`cursor`] keeps a selection stable while results are refreshed

pub mod cursor;
pub mod matcher;
pub mod ranking;

pub use cursor::ResultCursor;
pub use matcher::{FuzzyMatcher, Matcher, SubstringMatcher};
pub use ranking::{RankedResults, ScoredMatch, refresh};
