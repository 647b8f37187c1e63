//! # opfind
//!
//! Search-as-you-type fuzzy lookup over a catalog of processing operators.
//!
//! ## Features
//!
//! - Query tokenization on spaces and periods, plus the whole query
//! - Weighted prefix, word, alias and typo-tolerant matching
//! - Stable ranking by descending score
//! - Selection bookkeeping that survives refreshes
//! - JSON catalogs and configuration
//!
//! ```
//! use opfind::catalog::Catalog;
//! use opfind::search::refresh;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let results = refresh("terrain corr", &catalog);
//! assert_eq!(results[0].name(), "Terrain-Correction");
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod util;

pub mod prelude {
    pub use crate::analysis::token_set::TokenSet;
    pub use crate::catalog::{Catalog, CatalogEntry};
    pub use crate::config::{ScoringWeights, SearchConfig};
    pub use crate::error::{OpfindError, Result};
    pub use crate::search::{FuzzyMatcher, Matcher, RankedResults, ResultCursor, refresh};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
