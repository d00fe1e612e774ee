use crate::filter::ExtensionFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: Option<ExtensionFilter>,
    pub exclude_output: bool,
}
impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("merged.txt"),
            extensions: None,
            exclude_output: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct MergeBuilder {
    options: MergeOptions,
}
impl MergeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: MergeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.extensions = Some(ExtensionFilter::new(extensions));
        self
    }
    pub fn filter(mut self, filter: Option<ExtensionFilter>) -> Self {
        self.options.extensions = filter;
        self
    }
    pub fn all_files(mut self) -> Self {
        self.options.extensions = None;
        self
    }
    pub fn include_output(mut self, yes: bool) -> Self {
        self.options.exclude_output = !yes;
        self
    }
    pub fn build(self) -> MergeOptions {
        self.options
    }
}
