use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Cannot enumerate root directory {path}: {source}")]
    Root {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write output {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
}
impl MergeError {
    pub(crate) fn root(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Root {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Output {
            path: path.into(),
            source,
        }
    }
}
