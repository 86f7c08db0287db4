//! Heuristic question height estimation.

use crate::model::{Question, QuestionKind};
use crate::style::StylePreset;

/// Horizontal indent applied to option lines, expressed as a character
/// count subtracted from the line capacity.
const OPTION_INDENT_CHARS: usize = 5;

/// Fixed vertical margin between consecutive options, in points.
const OPTION_MARGIN: f32 = 4.0;

/// Strategy for estimating a question's rendered vertical extent.
///
/// The paginator depends only on this trait; the built-in heuristic can
/// be swapped for a real text-measurement routine as long as the
/// estimate stays monotonic in text length.
pub trait HeightEstimator {
    /// Estimate the height of one question in points. Must be a pure
    /// function of the question and style.
    fn estimate(&self, question: &Question, preset: &StylePreset) -> f32;
}

/// The default estimator: approximates line counts from an average
/// character width of half the font size.
///
/// This is deliberately not a text-shaping engine. It only needs to be
/// monotonic in text length and consistent between layout and rendering,
/// so any systematic bias is uniform across items.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharWidthEstimator;

impl CharWidthEstimator {
    fn chars_per_line(preset: &StylePreset) -> usize {
        let usable_width = preset.page_size.width() - preset.page_padding * 2.0;
        let char_width = preset.base_font_size * 0.5;
        (usable_width / char_width).floor().max(1.0) as usize
    }

    fn line_count(text: &str, capacity: usize) -> f32 {
        let chars = text.chars().count();
        ((chars as f32) / (capacity.max(1) as f32)).ceil().max(1.0)
    }
}

impl HeightEstimator for CharWidthEstimator {
    fn estimate(&self, question: &Question, preset: &StylePreset) -> f32 {
        let line_height = preset.line_height();
        let chars_per_line = Self::chars_per_line(preset);

        // Fixed per-item base cost.
        let mut height = preset.question_spacing;

        height += Self::line_count(&question.text, chars_per_line) * line_height;

        match question.kind {
            QuestionKind::MultipleChoice => {
                let option_capacity = chars_per_line.saturating_sub(OPTION_INDENT_CHARS);
                for option in &question.options {
                    height += Self::line_count(option, option_capacity) * line_height;
                    height += OPTION_MARGIN;
                }
            }
            QuestionKind::TrueFalse => {
                // The True / False toggle row.
                height += line_height;
            }
            QuestionKind::ShortAnswer => {
                // Blank writing space.
                height += line_height * 2.0;
            }
        }

        height
    }
}
