//! Tag cloud core: pure tokenizing, counting, ranking and font scaling.
mod config;
mod font;
mod frequency;
mod rank;
mod token;

pub use config::{
    CloudConfig, ConfigError, FontBounds, SeparatorSet, DEFAULT_SEPARATORS, MAX_FONT_SIZE,
    MIN_FONT_SIZE,
};
pub use font::{font_size, RankedEntry};
pub use frequency::{FrequencyCounter, FrequencyTable};
pub use rank::{by_count_rank, by_display_order, select, CountBounds, Selection, WordCount};
pub use token::{next_token, Tokens};
