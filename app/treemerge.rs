//! Command-line interface for treemerge.
//!
//! Walks a directory tree and writes every file, headed by its relative path,
//! into one output file (or stdout with `-o -`).

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;
use treemerge::output::{self, SummaryFormat};
use treemerge::{ExtensionFilter, MergeBuilder, MergeError, MergeOptions, MergeSummary};

/// treemerge — flatten a directory tree into one text file
#[derive(Parser)]
#[command(name = "treemerge", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file, `-` for stdout
    #[arg(short, long, default_value = "merged.txt")]
    output: PathBuf,

    /// Only merge files with these extensions (repeatable or comma-separated, e.g. `-e .h,.cpp`)
    #[arg(short, long = "ext", value_delimiter = ',')]
    extensions: Vec<String>,

    /// Merge the output file too when it lives under the root
    #[arg(long)]
    include_output: bool,

    /// Print a run summary
    #[arg(long, value_enum)]
    summary: Option<SummaryKind>,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SummaryKind {
    Text,
    Json,
}

impl Cli {
    fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn into_options(self) -> (MergeOptions, Option<SummaryKind>) {
        let filter = if self.extensions.is_empty() {
            None
        } else {
            Some(ExtensionFilter::new(&self.extensions))
        };
        let options = MergeBuilder::new(self.root)
            .output(self.output)
            .filter(filter)
            .include_output(self.include_output)
            .build();
        (options, self.summary)
    }
}

/// Logs go to stderr so they never interleave with `-o -`.
/// `TREEMERGE_LOG` overrides the level picked from `-v`/`-q`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("TREEMERGE_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let to_stdout = cli.to_stdout();
    let (options, summary_kind) = cli.into_options();

    let result = if to_stdout {
        run_stdout(&options)
    } else {
        treemerge::merge(options)
    };

    match result {
        Ok(summary) => {
            if let Some(kind) = summary_kind {
                print_summary(&summary, kind, to_stdout);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn run_stdout(options: &MergeOptions) -> Result<MergeSummary, MergeError> {
    let stdout = io::stdout();
    let handle = io::BufWriter::new(stdout.lock());
    treemerge::merge_into(options, handle)
}

/// Text summaries go to stderr; JSON goes to stdout unless stdout carries the merge.
fn print_summary(summary: &MergeSummary, kind: SummaryKind, to_stdout: bool) {
    let format = match kind {
        SummaryKind::Text => SummaryFormat::Text,
        SummaryKind::Json => SummaryFormat::Json,
    };
    let rendered = output::format_summary(summary, format).unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    if kind == SummaryKind::Text || to_stdout {
        eprint!("{}", rendered);
        return;
    }
    let mut handle = io::stdout().lock();
    if writeln!(handle, "{}", rendered).is_err() {
        eprintln!("Failed to write to stdout");
        exit(1);
    }
}
