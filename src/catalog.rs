//! Catalog of searchable entries.
//!
//! A [`Catalog`] is an ordered, validated snapshot of [`CatalogEntry`] values.
//! Its order is the tie-break order used when ranking.
//!
//! # Examples
//!
//! ```
//! use opfind::catalog::Catalog;
//! use opfind::catalog::entry::CatalogEntry;
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new("Resample"),
//!     CatalogEntry::new("Subset"),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get("subset").map(|e| e.name()), Some("Subset"));
//! ```

pub mod entry;

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::error::{OpfindError, Result};

pub use entry::CatalogEntry;

const BUILTIN_CATALOG: &str = include_str!("catalog/builtin.json");

/// An ordered collection of uniquely named entries.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// Lowercased name to position
    by_name: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting blank names and names that collide when
    /// compared case-insensitively.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut by_name = AHashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.name().trim().is_empty() {
                return Err(OpfindError::catalog(format!(
                    "entry {position} has an empty name"
                )));
            }
            let key = entry.fields().name.clone();
            if let Some(previous) = by_name.insert(key, position) {
                return Err(OpfindError::catalog(format!(
                    "duplicate name {:?} (entries {previous} and {position})",
                    entry.name()
                )));
            }
        }

        Ok(Catalog { entries, by_name })
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a JSON catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        debug!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog of common earth-observation processing operators that
    /// ships with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Look up an entry by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&position| &self.entries[position])
    }

    /// Position of an entry with the given name, ignoring case.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate over entries in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AsRef<[CatalogEntry]> for Catalog {
    fn as_ref(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
