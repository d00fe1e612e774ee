//! Output formatting for merge runs.
//!
//! [`RecordWriter`] owns the merged file format: every record is a blank line,
//! a `// <relative path>` header, then either the file's raw content or a
//! `[Error reading file: ...]` placeholder line. Content is copied verbatim,
//! with no trailing newline added.
//!
//! [`format_summary`] renders a [`MergeSummary`] for humans or as JSON.

use crate::MergeSummary;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Streams merge records to a sink in the order they are pushed.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes the header line for `relative`.
    pub fn header(&mut self, relative: &Path) -> io::Result<()> {
        write!(self.inner, "\n// {}\n", relative.display())
    }

    pub fn content(&mut self, content: &str) -> io::Result<()> {
        self.inner.write_all(content.as_bytes())
    }

    /// Writes the placeholder that stands in for unreadable content.
    pub fn placeholder(&mut self, error: impl Display) -> io::Result<()> {
        writeln!(self.inner, "[Error reading file: {}]", error)
    }

    /// Flushes and hands back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Supported summary formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
}

/// Renders the summary of a run.
pub fn format_summary(
    summary: &MergeSummary,
    format: SummaryFormat,
) -> Result<String, serde_json::Error> {
    match format {
        SummaryFormat::Text => Ok(format_text(summary)),
        SummaryFormat::Json => serde_json::to_string_pretty(summary),
    }
}

fn format_text(summary: &MergeSummary) -> String {
    let mut out = String::with_capacity(256);
    let target = summary
        .output
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stream>".to_string());
    out.push_str(&format!(
        "Merged {} file(s) ({} bytes) from {} into {}\n",
        summary.written(),
        summary.total_bytes(),
        summary.root.display(),
        target
    ));
    if summary.skipped > 0 {
        out.push_str(&format!("Skipped by extension filter: {}\n", summary.skipped));
    }
    if summary.excluded_output {
        out.push_str("Output file found under root and left out\n");
    }
    let failures: Vec<_> = summary.files.iter().filter(|f| !f.is_ok()).collect();
    if !failures.is_empty() {
        out.push_str(&format!("Unreadable: {}\n", failures.len()));
        for file in failures {
            out.push_str(&format!(
                "  {}: {}\n",
                file.path.display(),
                file.error.as_deref().unwrap_or_default()
            ));
        }
    }
    out
}
