use std::cmp::Ordering;

use crate::FrequencyTable;

/// A normalized word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Smallest and largest count among the selected words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBounds {
    pub min: u64,
    pub max: u64,
}

impl CountBounds {
    pub fn contains(&self, count: u64) -> bool {
        self.min <= count && count <= self.max
    }
}

/// The top-N words in display order, plus their count bounds.
///
/// `bounds` is `None` exactly when `entries` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub entries: Vec<WordCount>,
    pub bounds: Option<CountBounds>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-runs the selection over entries already held, e.g. to narrow it to fewer words.
    pub fn reselect(self, n: usize) -> Selection {
        select_entries(self.entries, n)
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Ranking order: count descending, then word descending (case-insensitive),
/// then exact word descending.
pub fn by_count_rank(a: &WordCount, b: &WordCount) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| cmp_ignore_case(&b.word, &a.word))
        .then_with(|| b.word.cmp(&a.word))
}

/// Display order: word ascending (case-insensitive), then count ascending,
/// then exact word ascending.
pub fn by_display_order(a: &WordCount, b: &WordCount) -> Ordering {
    cmp_ignore_case(&a.word, &b.word)
        .then_with(|| a.count.cmp(&b.count))
        .then_with(|| a.word.cmp(&b.word))
}

/// Drains `table` and keeps its `n` highest-ranked words in display order.
pub fn select(table: FrequencyTable, n: usize) -> Selection {
    select_entries(table.into_entries(), n)
}

fn select_entries(mut ranked: Vec<WordCount>, n: usize) -> Selection {
    ranked.sort_by(by_count_rank);
    ranked.truncate(n);

    let bounds = match (ranked.first(), ranked.last()) {
        (Some(top), Some(bottom)) => Some(CountBounds {
            min: bottom.count,
            max: top.count,
        }),
        _ => None,
    };

    ranked.sort_by(by_display_order);
    Selection {
        entries: ranked,
        bounds,
    }
}
