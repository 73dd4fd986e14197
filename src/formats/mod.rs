//! Input formats.
//!
//! Only FASTA is supported. Extensions are informational: a file is parsed
//! as FASTA whatever its name, and the loader merely warns when the
//! extension looks unusual.

pub mod fasta;

use std::ffi::OsStr;
use std::path::Path;

pub use fasta::parse_fasta;

/// Extensions conventionally used for FASTA files.
pub const FASTA_EXTENSIONS: &[&str] = &["fasta", "fa", "fna", "fas"];

/// Returns true if the path has a FASTA extension (case-insensitive).
pub fn is_fasta_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| {
            let ext = ext.to_lowercase();
            FASTA_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fasta_extensions() {
        assert!(is_fasta_path("test.fa"));
        assert!(is_fasta_path("test.fasta"));
        assert!(is_fasta_path("dir/test.FASTA"));
        assert!(is_fasta_path("test.fna"));
        assert!(is_fasta_path("test.fas"));
        assert!(!is_fasta_path("test.txt"));
        assert!(!is_fasta_path("test.nex"));
        assert!(!is_fasta_path("fasta"));
    }
}
