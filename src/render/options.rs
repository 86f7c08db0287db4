//! Rendering options and configuration.

/// Options for rendering paginated output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Mark the correct answer inline next to each option ("reveal
    /// correct answers" preview mode).
    pub reveal_answers: bool,

    /// Render page bodies in parallel. Output is identical either way;
    /// this only affects wall-clock time for large documents.
    pub parallel: bool,

    /// Column width used when wrapping body text, in characters.
    pub text_width: usize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable inline answer reveal.
    pub fn with_reveal_answers(mut self, reveal: bool) -> Self {
        self.reveal_answers = reveal;
        self
    }

    /// Disable parallel page rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the text wrapping width.
    pub fn with_text_width(mut self, width: usize) -> Self {
        self.text_width = width.max(20);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reveal_answers: false,
            parallel: true,
            text_width: 72,
        }
    }
}
