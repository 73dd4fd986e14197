//! Export of sequence statistics.
//!
//! Records are serialized either as a pretty-printed JSON array or as a CSV
//! table with one row per record. Serialization happens fully in memory, so
//! a caller writing the result to disk never produces a partial file.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::SequenceRecord;

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Name,Length,CG%,Codons,A,C,G,T";

/// Errors that can occur during export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported export format: {0:?} (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Selects the format from a destination file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ExportResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) => ext.parse(),
            None => Err(ExportError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// JSON view of a record: stored fields first, then derived statistics.
#[derive(Serialize)]
struct ExportedRecord<'a> {
    name: &'a str,
    sequence: &'a str,
    length: usize,
    gc_content: f64,
    codons: usize,
    count_a: usize,
    count_c: usize,
    count_g: usize,
    count_t: usize,
}

impl<'a> From<&'a SequenceRecord> for ExportedRecord<'a> {
    fn from(record: &'a SequenceRecord) -> Self {
        let stats = record.stats();
        Self {
            name: record.name(),
            sequence: record.sequence(),
            length: stats.length,
            gc_content: stats.gc_content(),
            codons: stats.codon_count(),
            count_a: stats.count_a,
            count_c: stats.count_c,
            count_g: stats.count_g,
            count_t: stats.count_t,
        }
    }
}

/// Only the stored fields are read back; anything else is ignored.
#[derive(Deserialize)]
struct ImportedRecord {
    name: String,
    sequence: String,
}

/// Serializes `records` in the requested format.
pub fn export(records: &[SequenceRecord], format: ExportFormat) -> ExportResult<String> {
    debug!(records = records.len(), %format, "exporting records");
    match format {
        ExportFormat::Json => to_json(records),
        ExportFormat::Csv => Ok(to_csv(records)),
    }
}

/// Pretty-printed JSON array of records.
pub fn to_json(records: &[SequenceRecord]) -> ExportResult<String> {
    let exported: Vec<ExportedRecord<'_>> = records.iter().map(ExportedRecord::from).collect();
    Ok(serde_json::to_string_pretty(&exported)?)
}

/// CSV table, one `\n`-terminated line per row.
pub fn to_csv(records: &[SequenceRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        let stats = record.stats();
        out.push_str(&format!(
            "{},{},{:.2},{},{},{},{},{}\n",
            csv_quote(record.name()),
            stats.length,
            stats.gc_content(),
            stats.codon_count(),
            stats.count_a,
            stats.count_c,
            stats.count_g,
            stats.count_t,
        ));
    }

    out
}

/// Reads records back from a JSON export, re-normalizing each sequence.
pub fn import_json(content: &str) -> ExportResult<Vec<SequenceRecord>> {
    let imported: Vec<ImportedRecord> = serde_json::from_str(content)?;
    Ok(imported
        .into_iter()
        .map(|r| SequenceRecord::new(r.name, r.sequence))
        .collect())
}

/// Wraps a field in double quotes, doubling any quote inside it.
fn csv_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
