//! Data model for parsed sequences.
//!
//! A [`SequenceRecord`] is one named entry of a FASTA file. The sequence is
//! normalized once at construction (uppercase, no whitespace) and never
//! changes afterwards, so every statistic derived from it stays consistent.

use crate::stats::SequenceStats;

/// Represents a single named sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceRecord {
    /// Header text (without '>'), trimmed
    name: String,
    /// Uppercased sequence data with whitespace removed
    sequence: String,
}

impl SequenceRecord {
    /// Creates a new record, normalizing both fields.
    ///
    /// The name is trimmed; the sequence is uppercased (ASCII only) and
    /// stripped of any whitespace.
    pub fn new(name: impl AsRef<str>, sequence: impl AsRef<str>) -> Self {
        let sequence = sequence.as_ref();
        let mut data = String::with_capacity(sequence.len());
        data.extend(
            sequence
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_uppercase()),
        );

        Self {
            name: name.as_ref().trim().to_string(),
            sequence: data,
        }
    }

    /// Builds a record from parts that are already normalized.
    pub(crate) fn from_normalized(name: String, sequence: String) -> Self {
        Self { name, sequence }
    }

    /// The record name (header line content).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of characters in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Computes all statistics in a single pass.
    pub fn stats(&self) -> SequenceStats {
        SequenceStats::compute(&self.sequence)
    }

    pub fn count_a(&self) -> usize {
        self.stats().count_a
    }

    pub fn count_c(&self) -> usize {
        self.stats().count_c
    }

    pub fn count_g(&self) -> usize {
        self.stats().count_g
    }

    pub fn count_t(&self) -> usize {
        self.stats().count_t
    }

    /// GC percentage in `[0, 100]`, `0` for an empty sequence.
    pub fn gc_content(&self) -> f64 {
        self.stats().gc_content()
    }

    /// Sliding-window codon count, `max(0, len - 2)`.
    pub fn codon_count(&self) -> usize {
        self.stats().codon_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_sequence() {
        let record = SequenceRecord::new("  seq1 ", "ac gt\r\n");
        assert_eq!(record.name(), "seq1");
        assert_eq!(record.sequence(), "ACGT");
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_empty_record() {
        let record = SequenceRecord::new("", "");
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert_eq!(record.gc_content(), 0.0);
        assert_eq!(record.codon_count(), 0);
    }

    #[test]
    fn test_accessors_match_stats() {
        let record = SequenceRecord::new("x", "AACGTTTN");
        let stats = record.stats();
        assert_eq!(record.count_a(), stats.count_a);
        assert_eq!(record.count_c(), 1);
        assert_eq!(record.count_g(), 1);
        assert_eq!(record.count_t(), 3);
        assert_eq!(record.codon_count(), 6);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let record = SequenceRecord::new("x", "ACé");
        assert_eq!(record.len(), 3);
        assert_eq!(record.stats().length, 3);
    }
}
