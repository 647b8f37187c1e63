//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OpfindArgs, OutputFormat};
use crate::error::Result;

/// One ranked hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub category: Option<String>,
}

/// Result structure for search operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub tokens: Vec<String>,
    pub hits: Vec<SearchHit>,
    pub total_hits: usize,
    pub duration_us: u64,
    /// Only present in sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    /// Whether human output shows scores
    #[serde(skip)]
    pub show_scores: bool,
}

impl SearchResults {
    /// Drop the query and its hits, keeping display settings.
    pub fn clear(&mut self) {
        self.query.clear();
        self.tokens.clear();
        self.hits.clear();
        self.total_hits = 0;
        self.selected = None;
    }
}

/// Result structure for tokenization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub query: String,
    pub tokens: Vec<String>,
}

/// One line of a catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedEntry {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub aliases: Vec<String>,
}

/// Result structure for catalog listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogListing {
    pub entries: Vec<ListedEntry>,
    #[serde(skip)]
    pub long: bool,
}

/// Result structure for an entry picked in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickedEntry {
    pub picked: String,
}

/// Results that know how to print themselves for people and as CSV rows.
pub trait CliOutput: Serialize {
    /// Human-readable rendering.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;

    /// Rows for CSV output, as a JSON array of flat objects.
    fn csv_rows(&self) -> Result<serde_json::Value>;
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: CliOutput>(
    message: &str,
    result: &T,
    args: &OpfindArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 && !message.is_empty() {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)
        }
        OutputFormat::Json => output_json(result, args, out),
        OutputFormat::Csv => output_csv(&result.csv_rows()?, out),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &OpfindArgs, out: &mut dyn Write) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Output an array of flat objects as CSV, header from the first row.
fn output_csv(rows: &serde_json::Value, out: &mut dyn Write) -> Result<()> {
    let Some(rows) = rows.as_array() else {
        writeln!(out, "value")?;
        writeln!(out, "{}", format_csv_value(rows))?;
        return Ok(());
    };

    for (i, row) in rows.iter().enumerate() {
        let Some(obj) = row.as_object() else {
            continue;
        };
        if i == 0 {
            let headers: Vec<&str> = obj.keys().map(String::as_str).collect();
            writeln!(out, "{}", headers.join(","))?;
        }
        let values: Vec<String> = obj.values().map(format_csv_value).collect();
        writeln!(out, "{}", values.join(","))?;
    }

    Ok(())
}

/// Format a JSON value as a single CSV field.
fn format_csv_value(value: &serde_json::Value) -> String {
    let text = match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(format_csv_value)
            .collect::<Vec<_>>()
            .join(";"),
        other => other.to_string(),
    };

    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

impl CliOutput for SearchResults {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if self.query.is_empty() {
            writeln!(out, "No query")?;
            return Ok(());
        }
        if self.hits.is_empty() {
            writeln!(out, "No matches for {:?}", self.query)?;
            return Ok(());
        }

        for hit in &self.hits {
            let marker = if self.selected == Some(hit.rank - 1) {
                ">"
            } else {
                " "
            };
            let mut line = format!("{marker} {:>3}. {}", hit.rank, hit.name);
            if let Some(category) = &hit.category {
                line.push_str(&format!("  [{category}]"));
            }
            if self.show_scores {
                line.push_str(&format!("  ({:.3})", hit.score));
            }
            writeln!(out, "{line}")?;
        }

        Ok(())
    }

    fn csv_rows(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.hits)?)
    }
}

impl CliOutput for TokenizeResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for token in &self.tokens {
            writeln!(out, "{token:?}")?;
        }
        Ok(())
    }

    fn csv_rows(&self) -> Result<serde_json::Value> {
        let rows: Vec<serde_json::Value> = self
            .tokens
            .iter()
            .map(|token| serde_json::json!({ "token": token }))
            .collect();
        Ok(serde_json::Value::Array(rows))
    }
}

impl CliOutput for CatalogListing {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for entry in &self.entries {
            if !self.long {
                writeln!(out, "{}", entry.name)?;
                continue;
            }
            writeln!(out, "{}", entry.name)?;
            if let Some(category) = &entry.category {
                writeln!(out, "    category: {category}")?;
            }
            if let Some(description) = &entry.description {
                writeln!(out, "    {description}")?;
            }
            if !entry.aliases.is_empty() {
                writeln!(out, "    aliases: {}", entry.aliases.join(", "))?;
            }
        }
        Ok(())
    }

    fn csv_rows(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.entries)?)
    }
}

impl CliOutput for PickedEntry {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "picked: {}", self.picked)?;
        Ok(())
    }

    fn csv_rows(&self) -> Result<serde_json::Value> {
        Ok(serde_json::json!([{ "picked": self.picked }]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_csv_value() {
        assert_eq!(format_csv_value(&json!(null)), "");
        assert_eq!(format_csv_value(&json!("plain")), "plain");
        assert_eq!(format_csv_value(&json!("a,b")), "\"a,b\"");
        assert_eq!(format_csv_value(&json!("say \"hi\"")), "\"say \"\"hi\"\"\"");
        assert_eq!(format_csv_value(&json!(["x", "y"])), "x;y");
        assert_eq!(format_csv_value(&json!(1.5)), "1.5");
    }

    #[test]
    fn test_output_csv_rows() {
        let mut out = Vec::new();
        output_csv(&json!([{"name": "Subset", "rank": 1}]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "name,rank\nSubset,1\n");
    }

    #[test]
    fn test_search_results_human() {
        let results = SearchResults {
            query: "sub".to_string(),
            tokens: vec!["sub".to_string()],
            hits: vec![SearchHit {
                rank: 1,
                name: "Subset".to_string(),
                score: 4.0,
                category: Some("Raster/Geometric".to_string()),
            }],
            total_hits: 1,
            duration_us: 10,
            selected: Some(0),
            show_scores: true,
        };

        let mut out = Vec::new();
        results.write_human(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">   1. Subset  [Raster/Geometric]  (4.000)\n"
        );
    }

    #[test]
    fn test_empty_search_results_human() {
        let results = SearchResults {
            query: "zzz".to_string(),
            tokens: vec!["zzz".to_string()],
            hits: Vec::new(),
            total_hits: 0,
            duration_us: 0,
            selected: None,
            show_scores: false,
        };

        let mut out = Vec::new();
        results.write_human(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No matches for \"zzz\"\n");
    }
}
