//! Rendering module for turning paginated documents into output formats.

mod answer_key;
mod json;
mod options;
mod text;

pub use answer_key::{chunk_answer_key, ANSWERS_PER_PAGE};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::{answer_key_text, to_text};
