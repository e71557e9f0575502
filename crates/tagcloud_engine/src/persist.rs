use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("output path is a directory: {0}")]
    TargetIsDir(String),
    #[error("two outputs would be written to the same file: {0}")]
    SameTarget(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Checks that `target` can be created or replaced, without touching it.
///
/// The parent directory must already exist; it is not created.
pub fn ensure_writable_destination(target: &Path) -> Result<(), PersistError> {
    if target.is_dir() {
        return Err(PersistError::TargetIsDir(target.display().to_string()));
    }
    let dir = parent_dir(target);
    let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    if !meta.is_dir() {
        return Err(PersistError::OutputDir("path is not a directory".into()));
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Whether `a` and `b` name the same file once made absolute.
pub fn same_destination(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::path::absolute(a), std::path::absolute(b)) {
        (Ok(a), Ok(b)) => {
            a == b
                || match (a.parent().map(fs::canonicalize), b.parent().map(fs::canonicalize)) {
                    (Some(Ok(pa)), Some(Ok(pb))) => pa == pb && a.file_name() == b.file_name(),
                    _ => false,
                }
        }
        _ => false,
    }
}

/// Atomically writes a whole document to one path: temp file in the same
/// directory, then rename over the target.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn probe(&self) -> Result<(), PersistError> {
        ensure_writable_destination(&self.target)
    }

    pub fn write(&self, content: &str) -> Result<PathBuf, PersistError> {
        self.stage(content)?.commit()
    }

    /// Writes `content` to a synced temp file next to the target without
    /// replacing the target yet.
    pub fn stage(&self, content: &str) -> Result<StagedFile, PersistError> {
        self.probe()?;

        let mut tmp = NamedTempFile::new_in(parent_dir(&self.target))?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        Ok(StagedFile {
            tmp,
            target: self.target.clone(),
        })
    }
}

/// Fully written temp file waiting to be renamed over its target.
///
/// Dropping it without [`StagedFile::commit`] deletes the temp file.
#[derive(Debug)]
pub struct StagedFile {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    pub fn commit(self) -> Result<PathBuf, PersistError> {
        self.tmp
            .persist(&self.target)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(self.target)
    }
}
