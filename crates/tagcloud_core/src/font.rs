use crate::{CountBounds, FontBounds, Selection};

/// Linearly interpolates `count` between the count bounds into a font size.
///
/// When every selected word has the same count the midpoint size is used.
/// Callers must pass `bounds.min <= count <= bounds.max`.
pub fn font_size(count: u64, bounds: CountBounds, font: FontBounds) -> u32 {
    debug_assert!(bounds.contains(count), "count {count} outside {bounds:?}");
    if bounds.min == bounds.max {
        return font.midpoint();
    }
    let span = u64::from(font.max() - font.min());
    let offset = (count - bounds.min) * span / (bounds.max - bounds.min);
    font.min() + offset as u32
}

/// A selected word with the font size it will be rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
    pub font_size: u32,
}

impl Selection {
    /// Attaches font sizes to every entry, keeping display order.
    pub fn scale(self, font: FontBounds) -> Vec<RankedEntry> {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        self.entries
            .into_iter()
            .map(|entry| RankedEntry {
                font_size: font_size(entry.count, bounds, font),
                word: entry.word,
                count: entry.count,
            })
            .collect()
    }
}
