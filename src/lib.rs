//! # Treemerge
//!
//! `treemerge` flattens a directory tree into one text file. Every file under the
//! root becomes a record: a blank line, a `// <relative path>` header, then the
//! file's content copied verbatim.
//!
//! ```text
//!
//! // a.txt
//! hello
//! // sub/b.h
//! int x;
//! ```
//!
//! Files can be restricted to a case-insensitive extension allowlist. A file that
//! cannot be read as UTF-8 text gets an `[Error reading file: ...]` line in place
//! of its content and the run carries on; only an unusable root directory or an
//! unwritable output aborts a run.
//!
//! Entries are visited in file-name order at every directory level, so re-running
//! over an unchanged tree produces byte-identical output. The output file is left
//! out of the walk when it lives under the root, unless
//! [`MergeBuilder::include_output`] asks otherwise.
//!
//! Progress is reported through `tracing`; install a subscriber to see it.
//!
//! # Example
//!
//! ```no_run
//! use treemerge::{MergeBuilder, merge};
//!
//! let options = MergeBuilder::new("src")
//!     .output("merged.txt")
//!     .extensions([".h", ".cpp"])
//!     .build();
//!
//! let summary = merge(options).expect("merge failed");
//! println!("{} files merged, {} unreadable", summary.written(), summary.failed());
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{merge, merge_files, merge_into};
pub use error::MergeError;
pub use filter::ExtensionFilter;
pub use options::{MergeBuilder, MergeOptions};
pub use types::{FileOutcome, MergeSummary};
