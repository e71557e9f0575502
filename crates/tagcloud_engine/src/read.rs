use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use cloud_logging::{cloud_debug, cloud_warn};
use tagcloud_core::{FrequencyCounter, FrequencyTable, SeparatorSet};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot open input file: {0}")]
    Open(#[source] io::Error),
    #[error("cannot read input file: {0}")]
    Unreadable(#[source] io::Error),
}

/// A read failure that ended counting early after at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadInterruption {
    /// Lines successfully counted before the failure.
    pub after_line: u64,
    pub message: String,
}

/// Frequency table for one input plus how much of it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountReport {
    pub table: FrequencyTable,
    pub lines: u64,
    pub words: u64,
    pub interruption: Option<ReadInterruption>,
}

pub fn open_input(path: &Path) -> Result<BufReader<File>, ReadError> {
    let file = File::open(path).map_err(ReadError::Open)?;
    if file.metadata().map_err(ReadError::Open)?.is_dir() {
        return Err(ReadError::Open(io::Error::other("path is a directory")));
    }
    Ok(BufReader::new(file))
}

/// Counts every line of `reader`.
///
/// A failure on the first line means the input is unreadable. A failure after
/// that ends the input: the lines already counted are kept and the failure is
/// returned in [`CountReport::interruption`].
pub fn count_input<R: BufRead>(
    reader: R,
    separators: &SeparatorSet,
) -> Result<CountReport, ReadError> {
    let mut counter = FrequencyCounter::new(separators);
    let mut interruption = None;

    for line in reader.lines() {
        match line {
            Ok(line) => counter.count_line(&line),
            Err(err) if counter.lines() == 0 => return Err(ReadError::Unreadable(err)),
            Err(err) => {
                cloud_warn!(
                    "Input read failed after line {}: {}; continuing with partial counts",
                    counter.lines(),
                    err
                );
                interruption = Some(ReadInterruption {
                    after_line: counter.lines(),
                    message: err.to_string(),
                });
                break;
            }
        }
    }

    let lines = counter.lines();
    let words = counter.words();
    let table = counter.finish();
    cloud_debug!(
        "Counted {} words ({} distinct) over {} lines",
        words,
        table.len(),
        lines
    );
    Ok(CountReport {
        table,
        lines,
        words,
        interruption,
    })
}
