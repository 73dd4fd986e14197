//! FASTA parser.
//!
//! This module turns raw FASTA text into [`SequenceRecord`]s.
//! It supports both single-line and multi-line sequences.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Parsing is total: any text is accepted. Lines before the first header
//! are ignored, and text with no header at all yields no records.

use tracing::trace;

use crate::model::SequenceRecord;

/// Parses FASTA content into records, in header order.
///
/// # Examples
///
/// ```
/// use fastastat::formats::fasta::parse_fasta;
///
/// let records = parse_fasta(">a\nACGT\n>b\nttTT\n");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].sequence(), "TTTT");
/// ```
pub fn parse_fasta(content: &str) -> Vec<SequenceRecord> {
    let mut records = Vec::new();

    let mut current_name: Option<&str> = None;
    let mut current_seq = String::new();

    for line in content.split('\n') {
        // Also drops the '\r' of CRLF files
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            // Save previous record, even when it has no sequence lines
            if let Some(name) = current_name.take() {
                records.push(finish_record(name, std::mem::take(&mut current_seq)));
            }
            current_name = Some(header.trim());
        } else if current_name.is_some() {
            append_sequence_line(&mut current_seq, line);
        }
    }

    // Don't forget the last record
    if let Some(name) = current_name {
        records.push(finish_record(name, current_seq));
    }

    trace!(records = records.len(), "parsed FASTA content");
    records
}

/// Appends one sequence line, uppercased, without any separator.
fn append_sequence_line(buffer: &mut String, line: &str) {
    // Fast path: most FASTA lines have no internal whitespace
    if line.chars().all(|c| !c.is_whitespace()) {
        buffer.extend(line.chars().map(|c| c.to_ascii_uppercase()));
    } else {
        buffer.extend(
            line.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_uppercase()),
        );
    }
}

fn finish_record(name: &str, mut sequence: String) -> SequenceRecord {
    sequence.shrink_to_fit();
    SequenceRecord::from_normalized(name.to_string(), sequence)
}
