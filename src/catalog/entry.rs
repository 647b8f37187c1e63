//! Searchable catalog entries.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;

/// A named, searchable item such as a processing operator.
///
/// Entries are immutable once built. The lowercased forms used for matching
/// are derived at construction (including deserialization), so scoring never
/// re-normalizes catalog text.
///
/// # Examples
///
/// ```
/// use opfind::catalog::entry::CatalogEntry;
///
/// let entry = CatalogEntry::new("Terrain-Correction")
///     .with_category("Radar/Geometric")
///     .with_aliases(["TC", "orthorectification"]);
///
/// assert_eq!(entry.name(), "Terrain-Correction");
/// assert_eq!(entry.fields().words, vec!["terrain", "correction"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "EntryRecord", into = "EntryRecord")]
pub struct CatalogEntry {
    name: String,
    category: Option<String>,
    description: Option<String>,
    aliases: Vec<String>,
    fields: SearchFields,
}

/// Lowercased views of an entry, prepared for matching.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFields {
    /// The whole name
    pub name: String,
    /// Name split into words
    pub words: Vec<String>,
    /// Name words joined by single spaces
    pub phrase: String,
    /// Aliases
    pub aliases: Vec<String>,
    /// Category path
    pub category: Option<String>,
    /// Words of the description
    pub description_words: Vec<String>,
}

/// On-disk shape of an entry. Only `name` is required.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntryRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl CatalogEntry {
    /// Create an entry with only a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        let mut entry = CatalogEntry {
            name: name.into(),
            category: None,
            description: None,
            aliases: Vec::new(),
            fields: SearchFields::default(),
        };
        entry.prepare();
        entry
    }

    /// Set the category.
    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self.prepare();
        self
    }

    /// Set the description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self.prepare();
        self
    }

    /// Set the aliases.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self.prepare();
        self
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the category, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the aliases.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Get the lowercased matching views.
    pub fn fields(&self) -> &SearchFields {
        &self.fields
    }

    fn prepare(&mut self) {
        let words: Vec<String> = WordTokenizer::new()
            .tokenize(&self.name)
            .map(|token| token.text)
            .collect();
        let phrase = words.join(" ");

        let description_words: Vec<String> = self
            .description
            .as_deref()
            .map(|text| text.unicode_words().map(str::to_lowercase).collect())
            .unwrap_or_default();

        self.fields = SearchFields {
            name: self.name.to_lowercase(),
            words,
            phrase,
            aliases: self.aliases.iter().map(|a| a.to_lowercase()).collect(),
            category: self.category.as_deref().map(str::to_lowercase),
            description_words,
        };
    }
}

impl From<EntryRecord> for CatalogEntry {
    fn from(record: EntryRecord) -> Self {
        let mut entry = CatalogEntry {
            name: record.name,
            category: record.category,
            description: record.description,
            aliases: record.aliases,
            fields: SearchFields::default(),
        };
        entry.prepare();
        entry
    }
}

impl From<CatalogEntry> for EntryRecord {
    fn from(entry: CatalogEntry) -> Self {
        EntryRecord {
            name: entry.name,
            category: entry.category,
            description: entry.description,
            aliases: entry.aliases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_prepared() {
        let entry = CatalogEntry::new("BandMaths")
            .with_category("Raster")
            .with_description("Create a new band from an arithmetic expression.")
            .with_aliases(["Band Arithmetic"]);

        let fields = entry.fields();
        assert_eq!(fields.name, "bandmaths");
        assert_eq!(fields.words, vec!["band", "maths"]);
        assert_eq!(fields.phrase, "band maths");
        assert_eq!(fields.aliases, vec!["band arithmetic"]);
        assert_eq!(fields.category.as_deref(), Some("raster"));
        assert_eq!(
            fields.description_words,
            vec!["create", "a", "new", "band", "from", "an", "arithmetic", "expression"]
        );
    }

    #[test]
    fn test_deserialize_prepares_fields() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"name": "Speckle-Filter", "aliases": ["Lee"]}"#).unwrap();

        assert_eq!(entry.name(), "Speckle-Filter");
        assert_eq!(entry.category(), None);
        assert_eq!(entry.fields().words, vec!["speckle", "filter"]);
        assert_eq!(entry.fields().aliases, vec!["lee"]);
    }

    #[test]
    fn test_serialize_skips_derived_fields() {
        let entry = CatalogEntry::new("Subset");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Subset"}"#);
    }
}
