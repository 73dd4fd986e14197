//! # fastastat - FASTA sequence statistics
//!
//! Parses FASTA nucleotide files, derives per-sequence statistics and
//! exports them as JSON or CSV.
//!
//! ## Architecture
//!
//! Text flows linearly through the modules:
//! - `formats`: FASTA parsing (raw text to records)
//! - `model`: the immutable `SequenceRecord`
//! - `stats`: length, GC content, codon and nucleotide counts
//! - `export`: JSON / CSV serialization and JSON re-import
//! - `controller`: session shell doing the file I/O around the core

pub mod controller;
pub mod export;
pub mod formats;
pub mod model;
pub mod stats;

pub use export::{export, import_json, ExportError, ExportFormat};
pub use formats::parse_fasta;
pub use model::SequenceRecord;
pub use stats::SequenceStats;
