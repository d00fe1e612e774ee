//! Case-insensitive extension allowlist.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// A set of normalized extensions (`.h`, `.cpp`, ...).
///
/// Entries are trimmed, lower-cased and given a leading dot if they lack one.
/// The empty entry matches files that have no extension at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| normalize(ext.as_ref()))
                .collect(),
        }
    }

    /// Whether `path`'s extension is in the allowlist.
    pub fn matches(&self, path: &Path) -> bool {
        self.extensions.contains(&extension_key(path))
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Dot-prefixed, lower-cased extension of `path`, or `""` when it has none.
///
/// `archive.tar.gz` yields `.gz`; `.bashrc` has no extension; `notes.` yields `.`.
pub(crate) fn extension_key(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_dot() {
        let filter = ExtensionFilter::new(["H", ".Cpp", "  rs "]);
        let got: Vec<_> = filter.iter().collect();
        assert_eq!(got, vec![".cpp", ".h", ".rs"]);
    }

    #[test]
    fn duplicate_spellings_collapse() {
        let filter = ExtensionFilter::new(["h", ".H", " .h "]);
        assert_eq!(filter.len(), 1);
        assert!(!filter.is_empty());
        assert!(ExtensionFilter::default().is_empty());
    }

    #[test]
    fn matches_case_insensitively() {
        let filter = ExtensionFilter::new([".h"]);
        assert!(filter.matches(Path::new("sub/b.h")));
        assert!(filter.matches(Path::new("sub/B.H")));
        assert!(!filter.matches(Path::new("a.txt")));
        assert!(!filter.matches(Path::new("Makefile")));
    }

    #[test]
    fn empty_entry_matches_extensionless_files() {
        let filter = ExtensionFilter::new([""]);
        assert!(filter.matches(Path::new("Makefile")));
        assert!(filter.matches(Path::new(".bashrc")));
        assert!(!filter.matches(Path::new("main.rs")));
    }

    #[test]
    fn extension_key_uses_last_component() {
        assert_eq!(extension_key(Path::new("a.tar.GZ")), ".gz");
        assert_eq!(extension_key(Path::new(".bashrc")), "");
        assert_eq!(extension_key(Path::new("notes.")), ".");
    }
}
