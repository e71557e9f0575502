use std::path::PathBuf;

use tagcloud_core::CountBounds;

use crate::{PersistError, ReadError, ReadInterruption};

/// Parameters of one tag cloud run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub words: usize,
    /// Optional JSON summary destination.
    pub summary: Option<PathBuf>,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudSummary {
    pub lines: u64,
    pub words: u64,
    pub distinct_words: usize,
    pub selected: usize,
    pub bounds: Option<CountBounds>,
    pub output_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    pub interruption: Option<ReadInterruption>,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("input {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: ReadError,
    },
    #[error("output {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: PersistError,
    },
}

impl EngineError {
    pub(crate) fn input(path: &std::path::Path, source: ReadError) -> Self {
        Self::Input {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn output(path: &std::path::Path, source: PersistError) -> Self {
        Self::Output {
            path: path.display().to_string(),
            source,
        }
    }
}
