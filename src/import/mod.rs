//! Import of external content into the document model.

mod txt;

pub use txt::{parse_txt, ImportResult};
