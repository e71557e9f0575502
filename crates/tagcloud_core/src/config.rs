use std::collections::HashSet;

/// Characters treated as word boundaries unless a caller supplies its own set.
pub const DEFAULT_SEPARATORS: &str = " `*\t\n\r,-.!?[];:'/()\"";

/// Smallest font size handed to the renderer.
pub const MIN_FONT_SIZE: u32 = 11;

/// Largest font size handed to the renderer.
pub const MAX_FONT_SIZE: u32 = 48;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("font bounds are inverted: min {min} > max {max}")]
    InvertedFontBounds { min: u32, max: u32 },
}

/// Immutable classification of characters into separators and word characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    pub fn new(separators: &str) -> Self {
        Self {
            chars: separators.chars().collect(),
        }
    }

    pub fn is_separator(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

/// Inclusive range of font sizes a count is interpolated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontBounds {
    min: u32,
    max: u32,
}

impl FontBounds {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedFontBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Size used when every selected word is equally frequent.
    pub fn midpoint(&self) -> u32 {
        self.min + (self.max - self.min) / 2
    }

    /// All sizes in the range, smallest first.
    pub fn sizes(&self) -> impl Iterator<Item = u32> {
        self.min..=self.max
    }
}

impl Default for FontBounds {
    fn default() -> Self {
        Self {
            min: MIN_FONT_SIZE,
            max: MAX_FONT_SIZE,
        }
    }
}

/// Per-run configuration threaded through the pipeline stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudConfig {
    pub separators: SeparatorSet,
    pub font: FontBounds,
}
