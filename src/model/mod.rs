//! Document model types for quiz content representation.
//!
//! This module defines the document structure the rest of the crate
//! operates on: a titled document holding ordered sections of questions
//! plus export settings. The model is layout-agnostic; pagination and
//! rendering consume it read-only.

mod document;
mod question;
mod section;

pub use document::{AnswerKeyMode, Document, DocumentSettings, NumberingStyle};
pub use question::{Question, QuestionKind};
pub use section::Section;

use std::sync::atomic::{AtomicU64, Ordering};

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh session-unique id string.
///
/// Ids only need to be unique within an editing session; a timestamp plus
/// a process-wide counter is sufficient and keeps the model free of
/// randomness.
pub fn new_id() -> String {
    let n = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("q-{}-{}", chrono::Utc::now().timestamp_millis(), n)
}
