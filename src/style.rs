//! Style presets controlling height estimation and rendering.
//!
//! Presets are immutable, process-wide constant data keyed by id.
//! Resolution is total: an unknown id falls back to the default preset,
//! which covers stale saved documents referencing removed presets.

use serde::{Deserialize, Serialize};

/// Id of the preset used when resolution fails.
pub const DEFAULT_PRESET_ID: &str = "standard";

/// Physical page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSize {
    /// A4 (210 x 297 mm).
    #[default]
    A4,
    /// US Letter (8.5 x 11 inches).
    Letter,
}

impl PageSize {
    /// Page width in points (1 point = 1/72 inch).
    pub fn width(&self) -> f32 {
        match self {
            PageSize::A4 => 595.0,
            PageSize::Letter => 612.0,
        }
    }

    /// Page height in points.
    pub fn height(&self) -> f32 {
        match self {
            PageSize::A4 => 842.0,
            PageSize::Letter => 792.0,
        }
    }
}

/// A named bundle of layout parameters.
///
/// Presets are constant data; they serialize into JSON output but are
/// never deserialized (documents store only the preset id).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylePreset {
    /// Preset identifier.
    pub id: &'static str,

    /// Human-readable name.
    pub display_name: &'static str,

    /// One-line description for preset pickers.
    pub description: &'static str,

    /// Physical page size.
    pub page_size: PageSize,

    /// Base font size in points.
    pub base_font_size: f32,

    /// Line height as a multiple of the font size.
    pub line_height_multiplier: f32,

    /// Padding on each page edge in points.
    pub page_padding: f32,

    /// Vertical spacing before each question in points.
    pub question_spacing: f32,
}

impl StylePreset {
    /// Height of one rendered text line in points.
    pub fn line_height(&self) -> f32 {
        self.base_font_size * self.line_height_multiplier
    }
}

static PRESETS: &[StylePreset] = &[
    StylePreset {
        id: "standard",
        display_name: "Standard Exam",
        description: "Balanced spacing and standard font size. Best for most quizzes.",
        page_size: PageSize::A4,
        base_font_size: 11.0,
        line_height_multiplier: 1.5,
        page_padding: 40.0,
        question_spacing: 14.0,
    },
    StylePreset {
        id: "compact",
        display_name: "Compact",
        description: "Smaller font and tighter spacing to save paper.",
        page_size: PageSize::A4,
        base_font_size: 9.0,
        line_height_multiplier: 1.3,
        page_padding: 30.0,
        question_spacing: 8.0,
    },
    StylePreset {
        id: "readable",
        display_name: "Large & Readable",
        description: "Larger text and generous spacing for accessibility.",
        page_size: PageSize::A4,
        base_font_size: 14.0,
        line_height_multiplier: 1.6,
        page_padding: 40.0,
        question_spacing: 20.0,
    },
];

/// Resolve a preset id to a concrete preset.
///
/// Never fails: unknown ids return the default preset.
pub fn resolve(preset_id: &str) -> &'static StylePreset {
    PRESETS
        .iter()
        .find(|p| p.id == preset_id)
        .unwrap_or_else(|| {
            // Unknown ids are a normal case, not a hard error.
            log::debug!("unknown preset id {:?}, using {}", preset_id, DEFAULT_PRESET_ID);
            default_preset()
        })
}

/// The default preset.
pub fn default_preset() -> &'static StylePreset {
    &PRESETS[0]
}

/// All registered presets, in display order.
pub fn all_presets() -> &'static [StylePreset] {
    PRESETS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_registered() {
        let preset = resolve("compact");
        assert_eq!(preset.id, "compact");
        assert_eq!(preset.base_font_size, 9.0);
        // Idempotent and structurally equal on repeated calls.
        assert_eq!(resolve("compact"), preset);
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        assert_eq!(resolve("no-such-preset"), resolve(DEFAULT_PRESET_ID));
        assert_eq!(resolve(""), default_preset());
    }

    #[test]
    fn test_page_size_points() {
        assert_eq!(PageSize::A4.width(), 595.0);
        assert_eq!(PageSize::A4.height(), 842.0);
        assert_eq!(PageSize::Letter.width(), 612.0);
    }

    #[test]
    fn test_line_height() {
        let preset = resolve("standard");
        assert!((preset.line_height() - 16.5).abs() < f32::EPSILON);
    }
}
