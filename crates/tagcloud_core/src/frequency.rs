use std::collections::HashMap;

use crate::{SeparatorSet, Tokens, WordCount};

/// Normalized word → occurrence count. Keys are unique and unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Consumes the table into an unordered list of entries.
    pub fn into_entries(self) -> Vec<WordCount> {
        self.counts
            .into_iter()
            .map(|(word, count)| WordCount::new(word, count))
            .collect()
    }

    fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }
}

/// Builds a [`FrequencyTable`] one line at a time.
///
/// Each line is lower-cased and split into tokens; tokens that start with a
/// separator are skipped, every other token counts as one occurrence.
#[derive(Debug)]
pub struct FrequencyCounter<'s> {
    separators: &'s SeparatorSet,
    table: FrequencyTable,
    lines: u64,
    words: u64,
}

impl<'s> FrequencyCounter<'s> {
    pub fn new(separators: &'s SeparatorSet) -> Self {
        Self {
            separators,
            table: FrequencyTable::new(),
            lines: 0,
            words: 0,
        }
    }

    pub fn count_line(&mut self, line: &str) {
        let line = line.to_lowercase();
        for token in Tokens::new(&line, self.separators) {
            let starts_with_separator = token
                .chars()
                .next()
                .is_some_and(|c| self.separators.is_separator(c));
            if !starts_with_separator {
                self.table.record(token);
                self.words += 1;
            }
        }
        self.lines += 1;
    }

    /// Lines consumed so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Word tokens counted so far, repeats included.
    pub fn words(&self) -> u64 {
        self.words
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn finish(self) -> FrequencyTable {
        self.table
    }
}

impl<'s, S: AsRef<str>> Extend<S> for FrequencyCounter<'s> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, lines: I) {
        for line in lines {
            self.count_line(line.as_ref());
        }
    }
}
