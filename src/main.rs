//! fastastat - FASTA sequence statistics
//!
//! ## Usage
//!
//! ```bash
//! fastastat seqs.fasta more.fa              # print the statistics table
//! fastastat seqs.fasta -o stats.csv         # export, format from extension
//! fastastat seqs.fasta -o out.txt -f json   # force the export format
//! ```
//!
//! Set `FASTASTAT_LOG` (e.g. `info`, `debug`) to see log output on stderr.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use fastastat::controller::{open_session, Session};
use fastastat::export::ExportFormat;

/// Export format selection for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// JSON array of records
    Json,
    /// CSV table of statistics
    Csv,
    /// Detect from the output file extension
    Auto,
}

impl From<FormatArg> for Option<ExportFormat> {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Some(ExportFormat::Json),
            FormatArg::Csv => Some(ExportFormat::Csv),
            FormatArg::Auto => None,
        }
    }
}

/// fastastat - per-sequence statistics for FASTA files
///
/// Without -o/--output, prints a table of name, length, GC % and codons.
/// With -o/--output, exports the statistics as JSON or CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA files to load, records are concatenated in this order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Export destination (.json or .csv)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Force the export format (overrides the output extension)
    #[arg(short = 'f', long = "format", value_enum, default_value = "auto")]
    format: FormatArg,

    /// Do not print the statistics table
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FASTASTAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Writes the summary table shown for each loaded record.
fn print_table<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let name_width = session
        .records()
        .iter()
        .map(|r| r.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    writeln!(
        out,
        "{:<name_width$}  {:>10}  {:>6}  {:>10}",
        "Name", "Length", "CG %", "Codons"
    )?;
    for record in session.records() {
        let stats = record.stats();
        writeln!(
            out,
            "{:<name_width$}  {:>10}  {:>6.2}  {:>10}",
            record.name(),
            stats.length,
            stats.gc_content(),
            stats.codon_count()
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let session = open_session(&args.files)?;

    if session.is_empty() {
        eprintln!("No FASTA records found");
    }

    if !args.quiet {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        print_table(&mut handle, &session)?;
    }

    if let Some(output) = args.output {
        let forced: Option<ExportFormat> = args.format.into();
        let format = match forced {
            Some(format) => {
                session.export_as(&output, format)?;
                format
            }
            None => session.export_to(&output)?,
        };
        eprintln!(
            "Wrote {} records as {} to {}",
            session.records().len(),
            format,
            output.display()
        );
    }

    Ok(())
}
