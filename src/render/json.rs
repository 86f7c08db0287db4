//! JSON rendering for paginated documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::layout::Page;
use crate::model::Document;
use crate::style::StylePreset;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: &'a str,
    settings: &'a crate::model::DocumentSettings,
    preset: &'a StylePreset,
    page_count: usize,
    pages: &'a [Page],
}

/// Convert a normalized document and its pages to JSON.
pub fn to_json(
    document: &Document,
    pages: &[Page],
    preset: &StylePreset,
    format: JsonFormat,
) -> Result<String> {
    let output = JsonOutput {
        title: &document.title,
        settings: &document.settings,
        preset,
        page_count: pages.len(),
        pages,
    };

    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&output),
        JsonFormat::Compact => serde_json::to_string(&output),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::model::{Question, Section};
    use crate::style;

    fn sample() -> (Document, Vec<Page>) {
        let mut doc = Document::new("Test Quiz");
        let mut section = Section::new("Part A");
        section.add_question(Question::true_false(1, "Water is wet.", true));
        doc.add_section(section);
        let pages = layout::paginate(&doc.sections, style::resolve("standard"));
        (doc, pages)
    }

    #[test]
    fn test_to_json_pretty() {
        let (doc, pages) = sample();
        let json = to_json(&doc, &pages, style::resolve("standard"), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Test Quiz\""));
        assert!(json.contains("\"section-header\""));
        assert!(json.contains("\"page_count\": 1"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let (doc, pages) = sample();
        let json = to_json(&doc, &pages, style::resolve("standard"), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"true-false\""));
    }
}
