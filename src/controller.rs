//! Session controller.
//!
//! This module is the thin shell around the core:
//! - Reading the selected FASTA files and concatenating their records
//! - Holding the loaded records for the session
//! - Writing exports to disk, choosing the format from the extension
//!
//! The core (`formats`, `stats`, `export`) never touches the filesystem;
//! all I/O lives here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::export::{export, ExportFormat};
use crate::formats::{is_fasta_path, parse_fasta};
use crate::model::SequenceRecord;

/// Records loaded during one session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    records: Vec<SequenceRecord>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from already parsed records.
    pub fn from_records(records: Vec<SequenceRecord>) -> Self {
        Self { records }
    }

    /// Replaces the session content with the records of `paths`, in order.
    ///
    /// Nothing is replaced if any file cannot be read.
    pub fn load_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<usize> {
        let mut records = Vec::new();
        for path in paths {
            records.extend(load_fasta_file(path)?);
        }
        self.records = records;
        info!(files = paths.len(), records = self.records.len(), "session loaded");
        Ok(self.records.len())
    }

    /// The loaded records, in file then header order.
    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exports to `path`, with the format taken from its extension.
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> Result<ExportFormat> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path)?;
        self.export_as(path, format)?;
        Ok(format)
    }

    /// Exports to `path` in an explicit format, whatever its extension.
    pub fn export_as<P: AsRef<Path>>(&self, path: P, format: ExportFormat) -> Result<()> {
        let path = path.as_ref();
        // Serialize first so a failure never leaves a partial file behind
        let content = export(&self.records, format)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), %format, records = self.records.len(), "export written");
        Ok(())
    }
}

/// Reads and parses one FASTA file.
pub fn load_fasta_file<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>> {
    let path = path.as_ref();
    if !is_fasta_path(path) {
        warn!(path = %path.display(), "file has no FASTA extension, parsing anyway");
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = parse_fasta(&content);
    if records.is_empty() {
        warn!(path = %path.display(), "no FASTA header found");
    }
    info!(path = %path.display(), records = records.len(), "file parsed");
    Ok(records)
}

/// Loads all `paths` into a fresh session.
pub fn open_session(paths: &[PathBuf]) -> Result<Session> {
    let mut session = Session::new();
    session.load_files(paths)?;
    Ok(session)
}
