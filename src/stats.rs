//! Per-sequence statistics.
//!
//! Everything here is a pure function of the sequence text. Statistics are
//! derived on demand and never stored on the record.

/// Nucleotide counts and length for one sequence.
///
/// Characters other than A/C/G/T (ambiguity codes, gaps, ...) count toward
/// `length` but not toward any nucleotide bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceStats {
    pub length: usize,
    pub count_a: usize,
    pub count_c: usize,
    pub count_g: usize,
    pub count_t: usize,
}

impl SequenceStats {
    /// Scans `sequence` once and tallies each nucleotide.
    ///
    /// Expects an already uppercased sequence; lowercase bases are not counted.
    pub fn compute(sequence: &str) -> Self {
        let mut stats = Self::default();
        for c in sequence.chars() {
            stats.length += 1;
            match c {
                'A' => stats.count_a += 1,
                'C' => stats.count_c += 1,
                'G' => stats.count_g += 1,
                'T' => stats.count_t += 1,
                _ => {}
            }
        }
        stats
    }

    /// Percentage of G and C over the full length, `0` when empty.
    pub fn gc_content(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        (self.count_c + self.count_g) as f64 / self.length as f64 * 100.0
    }

    /// Number of overlapping triplets, `max(0, length - 2)`.
    pub fn codon_count(&self) -> usize {
        self.length.saturating_sub(2)
    }

    /// Sum of the four nucleotide buckets.
    pub fn nucleotide_total(&self) -> usize {
        self.count_a + self.count_c + self.count_g + self.count_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counts() {
        let stats = SequenceStats::compute("AACGTTTN");
        assert_eq!(stats.length, 8);
        assert_eq!(stats.count_a, 2);
        assert_eq!(stats.count_c, 1);
        assert_eq!(stats.count_g, 1);
        assert_eq!(stats.count_t, 3);
        assert_eq!(stats.nucleotide_total(), 7);
    }

    #[test]
    fn test_gc_content() {
        let stats = SequenceStats::compute("ATGC");
        assert!((stats.gc_content() - 50.0).abs() < 1e-10);

        let stats = SequenceStats::compute("GGCC");
        assert!((stats.gc_content() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_gc_content_empty() {
        assert_eq!(SequenceStats::compute("").gc_content(), 0.0);
    }

    #[test]
    fn test_codon_count_short_sequences() {
        assert_eq!(SequenceStats::compute("").codon_count(), 0);
        assert_eq!(SequenceStats::compute("A").codon_count(), 0);
        assert_eq!(SequenceStats::compute("AC").codon_count(), 0);
        assert_eq!(SequenceStats::compute("ACG").codon_count(), 1);
        assert_eq!(SequenceStats::compute("ACGTAC").codon_count(), 4);
    }

    #[test]
    fn test_ambiguity_codes_only_count_toward_length() {
        let stats = SequenceStats::compute("NNRY");
        assert_eq!(stats.length, 4);
        assert_eq!(stats.nucleotide_total(), 0);
        assert_eq!(stats.gc_content(), 0.0);
    }

    proptest! {
        #[test]
        fn buckets_never_exceed_length(s in "[ACGTNRY-]{0,200}") {
            let stats = SequenceStats::compute(&s);
            prop_assert!(stats.nucleotide_total() <= stats.length);
            let pure = s.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T'));
            prop_assert_eq!(stats.nucleotide_total() == stats.length, pure);
        }

        #[test]
        fn gc_content_is_a_percentage(s in "[ACGTN]{0,200}") {
            let gc = SequenceStats::compute(&s).gc_content();
            prop_assert!((0.0..=100.0).contains(&gc));
        }

        #[test]
        fn codon_count_is_length_minus_two(s in "[ACGT]{0,50}") {
            let stats = SequenceStats::compute(&s);
            prop_assert_eq!(stats.codon_count(), s.len().saturating_sub(2));
        }
    }
}
