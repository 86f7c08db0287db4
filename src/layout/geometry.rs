//! Page geometry constants and derived budgets.

use crate::style::StylePreset;

/// Vertical space reserved at the top of every page for the running
/// title header, in points.
pub const HEADER_RESERVE: f32 = 40.0;

/// Vertical space reserved at the bottom of every page for the page
/// number footer, in points.
pub const FOOTER_RESERVE: f32 = 30.0;

/// Fixed estimate for a section header block (title, optional
/// description, separator rule), in points.
pub const SECTION_HEADER_HEIGHT: f32 = 40.0;

/// Resolved page geometry for one pagination run.
///
/// Computed once per invocation from the style preset so alternate page
/// sizes work without touching the pagination algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Full physical page height in points.
    pub page_height: f32,

    /// Height available for render items after padding and the footer
    /// reserve.
    pub usable_height: f32,

    /// Running height a fresh page starts at.
    pub header_reserve: f32,
}

impl PageGeometry {
    /// Derive the geometry for a style preset.
    pub fn for_preset(preset: &StylePreset) -> Self {
        let page_height = preset.page_size.height();
        Self {
            page_height,
            usable_height: page_height - (preset.page_padding * 2.0) - FOOTER_RESERVE,
            header_reserve: HEADER_RESERVE,
        }
    }
}
