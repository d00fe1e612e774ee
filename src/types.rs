use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one merged file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Path relative to the merge root, as written in the header line.
    pub path: PathBuf,
    /// Bytes of file content copied into the output.
    pub bytes: u64,
    /// The read failure recorded in place of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Report of a completed merge run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeSummary {
    pub root: PathBuf,
    /// `None` when the merge was written to a caller-supplied writer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Every file that received a record, in output order.
    pub files: Vec<FileOutcome>,
    /// Files left out by the extension filter.
    pub skipped: usize,
    /// Whether the output file itself was found under the root and left out.
    pub excluded_output: bool,
}

impl MergeSummary {
    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| !f.is_ok()).count()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}
