//! Staged export pipeline.
//!
//! Sequences normalize -> paginate -> render -> finalize, reporting each
//! stage transition through a progress callback so a host UI can show
//! discrete steps. The pipeline itself is synchronous; stage boundaries
//! are the only points where cancellation takes effect.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::layout::{self, Page};
use crate::model::{AnswerKeyMode, Document};
use crate::render::{self, JsonFormat, RenderOptions};
use crate::style;

/// Observable stages of an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    /// Normalizing content.
    Preparing,
    /// Laying out pages.
    Layout,
    /// Rendering pages to the output format.
    Rendering,
    /// Assembling the final output.
    Finalizing,
    /// Export finished successfully.
    Done,
    /// Export failed; see the returned error.
    Error,
}

impl ExportStage {
    /// Human-readable progress label.
    pub fn label(&self) -> &'static str {
        match self {
            ExportStage::Preparing => "Preparing content...",
            ExportStage::Layout => "Laying out pages...",
            ExportStage::Rendering => "Rendering output...",
            ExportStage::Finalizing => "Finalizing...",
            ExportStage::Done => "Done",
            ExportStage::Error => "Export failed",
        }
    }
}

/// Output format for an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Paginated plain text.
    #[default]
    Text,
    /// Structured JSON.
    Json,
}

/// Cooperative cancellation handle, checked between stages only.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next stage boundary;
    /// in-flight rendering work is not aborted.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Finished export output.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    /// Rendered content.
    pub content: String,

    /// Separately rendered answer key, when the document requests
    /// separate-output mode.
    pub answer_key: Option<String>,

    /// The pages the content was rendered from.
    pub pages: Vec<Page>,
}

/// Staged export pipeline.
///
/// A pipeline is cheap to build and holds no results between runs, so
/// retrying after a failure means calling [`run`](Self::run) again: the
/// whole pipeline restarts from `Preparing` on fresh normalized data,
/// never from a partial resume. One export per session at a time;
/// serializing concurrent runs is the caller's concern.
pub struct ExportPipeline {
    format: ExportFormat,
    render_options: RenderOptions,
    cancel: CancelToken,
    on_progress: Option<Box<dyn Fn(ExportStage) + Send>>,
}

impl ExportPipeline {
    /// Create a pipeline producing the given format.
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            render_options: RenderOptions::default(),
            cancel: CancelToken::new(),
            on_progress: None,
        }
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Attach a cancellation token.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Attach a progress callback invoked on every stage transition.
    pub fn on_progress(mut self, callback: impl Fn(ExportStage) + Send + 'static) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }

    fn advance(&self, stage: ExportStage) -> Result<()> {
        if self.cancel.is_cancelled() {
            log::info!("export cancelled before {:?}", stage);
            return Err(Error::Cancelled);
        }
        log::debug!("export stage: {:?}", stage);
        if let Some(ref callback) = self.on_progress {
            callback(stage);
        }
        Ok(())
    }

    /// Run the pipeline over a document.
    ///
    /// On failure the `Error` stage is reported and the error returned;
    /// the caller may retry by calling `run` again.
    pub fn run(&self, document: &Document) -> Result<ExportOutput> {
        match self.run_stages(document) {
            Ok(output) => {
                self.advance(ExportStage::Done)?;
                Ok(output)
            }
            Err(err) => {
                if let Some(ref callback) = self.on_progress {
                    callback(ExportStage::Error);
                }
                log::warn!("export failed: {}", err);
                Err(err)
            }
        }
    }

    fn run_stages(&self, document: &Document) -> Result<ExportOutput> {
        self.advance(ExportStage::Preparing)?;
        let normalized = layout::normalize(document);

        self.advance(ExportStage::Layout)?;
        let preset = style::resolve(&normalized.settings.selected_preset_id);
        let pages = layout::paginate(&normalized.sections, preset);

        // A document with questions must yield pages; zero pages here
        // means the layout engine malfunctioned, not a valid empty state.
        if pages.is_empty() && !normalized.is_empty() {
            return Err(Error::Layout(
                "pagination produced no pages for a non-empty document".to_string(),
            ));
        }

        self.advance(ExportStage::Rendering)?;
        let content = match self.format {
            ExportFormat::Text => render::to_text(&normalized, &pages, &self.render_options)?,
            ExportFormat::Json => render::to_json(&normalized, &pages, preset, JsonFormat::Pretty)?,
        };

        self.advance(ExportStage::Finalizing)?;
        let answer_key = if normalized.settings.answer_key_mode == AnswerKeyMode::Separate {
            Some(render::answer_key_text(&normalized)?)
        } else {
            None
        };

        Ok(ExportOutput {
            content,
            answer_key,
            pages,
        })
    }
}
