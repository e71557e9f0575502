//! Tag cloud engine: input reading, rendering and output persistence.
mod persist;
mod pipeline;
mod read;
mod render;
mod summary;
mod types;

pub use persist::{
    ensure_writable_destination, same_destination, AtomicFileWriter, PersistError, StagedFile,
};
pub use pipeline::generate_tag_cloud;
pub use read::{count_input, open_input, CountReport, ReadError, ReadInterruption};
pub use render::{CloudDocument, HtmlRenderer, Renderer};
pub use summary::build_summary_json;
pub use types::{CloudRequest, CloudSummary, EngineError};
