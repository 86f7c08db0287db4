//! # quizlay
//!
//! Quiz document layout engine for Rust.
//!
//! quizlay takes a document of free-form body text plus ordered sections
//! of quiz questions, estimates rendered heights heuristically, packs
//! sections and questions into fixed-size pages, and exports the result
//! as paginated plain text or structured JSON.
//!
//! ## Quick Start
//!
//! ```
//! use quizlay::{Document, Question, Section};
//! use quizlay::{layout, style};
//!
//! let mut doc = Document::new("Weekly Quiz");
//! let mut section = Section::new("General Knowledge");
//! section.add_question(Question::true_false(1, "The Earth orbits the Sun.", true));
//! doc.add_section(section);
//!
//! let preset = style::resolve(&doc.settings.selected_preset_id);
//! let pages = layout::paginate(&doc.sections, preset);
//! assert_eq!(pages.len(), 1);
//! ```
//!
//! ## Features
//!
//! - **Deterministic pagination**: pure functions from (sections, style)
//!   to pages; safe to call concurrently from preview and export
//! - **Atomic questions**: a question is never split across pages
//! - **Section isolation**: each section starts on its own page
//! - **Style presets**: named layout parameter bundles with total
//!   fallback resolution
//! - **Staged export**: observable preparing/layout/rendering/finalizing
//!   pipeline with cooperative cancellation
//! - **Plain-text import** and **session snapshots** with legacy
//!   migration

pub mod error;
pub mod export;
pub mod import;
pub mod layout;
pub mod model;
pub mod render;
pub mod snapshot;
pub mod style;
pub mod template;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{CancelToken, ExportFormat, ExportOutput, ExportPipeline, ExportStage};
pub use layout::{normalize, paginate, CharWidthEstimator, HeightEstimator, Page, RenderItem};
pub use model::{
    AnswerKeyMode, Document, DocumentSettings, NumberingStyle, Question, QuestionKind, Section,
};
pub use render::{JsonFormat, RenderOptions};
pub use snapshot::{load_snapshot, save_snapshot, Snapshot};
pub use style::{resolve, PageSize, StylePreset, DEFAULT_PRESET_ID};
pub use template::{all_templates, find_template, DocumentTemplate};

/// Normalize a document and lay it out with its configured preset.
///
/// Convenience wrapper over [`layout::normalize`], [`style::resolve`],
/// and [`layout::paginate`].
pub fn layout_document(document: &Document) -> Vec<Page> {
    let normalized = layout::normalize(document);
    let preset = style::resolve(&normalized.settings.selected_preset_id);
    layout::paginate(&normalized.sections, preset)
}

/// Export a document to a string in the given format.
///
/// Runs the full staged pipeline with default render options.
pub fn export_to_string(document: &Document, format: ExportFormat) -> Result<String> {
    let output = ExportPipeline::new(format).run(document)?;
    Ok(output.content)
}
