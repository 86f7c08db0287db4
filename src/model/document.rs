//! Document-level types.

use super::{Question, Section};
use serde::{Deserialize, Serialize};

/// Placeholder body content for a fresh document. A body equal to this
/// value is treated as empty by the renderers.
pub const PLACEHOLDER_BODY: &str = "<p>Start typing your content here...</p>";

/// A quiz document: free-form body content plus ordered sections of
/// grouped questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title.
    pub title: String,

    /// Free-form rich-text body rendered as a preamble before the
    /// question pages.
    #[serde(default)]
    pub body_content: String,

    /// Sections in rendering order.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Export and display settings.
    #[serde(default)]
    pub settings: DocumentSettings,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_content: PLACEHOLDER_BODY.to_string(),
            sections: Vec::new(),
            settings: DocumentSettings::default(),
        }
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Check if the document has no questions at all.
    pub fn is_empty(&self) -> bool {
        self.question_count() == 0
    }

    /// All questions across all sections, flattened in display order.
    pub fn all_questions(&self) -> Vec<&Question> {
        self.sections.iter().flat_map(|s| s.questions.iter()).collect()
    }

    /// Check if the body content carries real text (non-empty and not the
    /// blank-state placeholder).
    pub fn has_body(&self) -> bool {
        !self.body_content.is_empty()
            && self.body_content != PLACEHOLDER_BODY
            && self.body_content != "<p></p>"
    }

    /// Reassign question numbers according to the configured numbering
    /// style: contiguous from 1 across the whole document, or restarting
    /// at 1 in each section.
    ///
    /// Called after every structural change (add, remove, reorder).
    /// The layout engine never renumbers; it only reads `number`.
    pub fn renumber(&mut self) {
        let mut next = 1u32;
        for section in &mut self.sections {
            if self.settings.numbering_style == NumberingStyle::PerSection {
                next = 1;
            }
            for question in &mut section.questions {
                question.number = next;
                next += 1;
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("")
    }
}

/// How questions are numbered across sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingStyle {
    /// Numbers run 1..N across the whole document.
    #[default]
    Continuous,

    /// Numbers restart at 1 in each section.
    PerSection,
}

/// Where the answer key appears in the exported output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKeyMode {
    /// No answer key in the output.
    Hidden,

    /// Answer key pages appended after the question pages.
    #[default]
    Appended,

    /// Answer key produced as a separate output.
    Separate,
}

/// Export and display settings for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// Id of the style preset to lay out and render with.
    pub selected_preset_id: String,

    /// Prefix the output with a cover page.
    pub cover_page_enabled: bool,

    /// Render section titles (a display concern; the paginator always
    /// emits section headers regardless).
    pub show_section_titles: bool,

    /// Render question numbers.
    pub show_question_numbers: bool,

    /// Numbering style applied by [`Document::renumber`].
    pub numbering_style: NumberingStyle,

    /// Answer key placement.
    pub answer_key_mode: AnswerKeyMode,

    /// Optional document description used on the cover page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            selected_preset_id: crate::style::DEFAULT_PRESET_ID.to_string(),
            cover_page_enabled: true,
            show_section_titles: true,
            show_question_numbers: true,
            numbering_style: NumberingStyle::Continuous,
            answer_key_mode: AnswerKeyMode::Appended,
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn doc_with_counts(counts: &[usize]) -> Document {
        let mut doc = Document::new("Test");
        for (i, &n) in counts.iter().enumerate() {
            let mut section = Section::new(format!("Part {}", i + 1));
            for _ in 0..n {
                section.add_question(Question::true_false(0, "statement", true));
            }
            doc.add_section(section);
        }
        doc
    }

    #[test]
    fn test_question_count() {
        let doc = doc_with_counts(&[3, 2]);
        assert_eq!(doc.question_count(), 5);
        assert!(!doc.is_empty());
        assert!(Document::new("x").is_empty());
    }

    #[test]
    fn test_renumber_continuous() {
        let mut doc = doc_with_counts(&[2, 3]);
        doc.renumber();
        let numbers: Vec<u32> = doc.all_questions().iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_renumber_per_section() {
        let mut doc = doc_with_counts(&[2, 3]);
        doc.settings.numbering_style = NumberingStyle::PerSection;
        doc.renumber();
        let numbers: Vec<u32> = doc.all_questions().iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2, 1, 2, 3]);
    }

    #[test]
    fn test_has_body() {
        let mut doc = Document::new("Test");
        assert!(!doc.has_body());
        doc.body_content = "<p>Read the instructions.</p>".to_string();
        assert!(doc.has_body());
        doc.body_content = "<p></p>".to_string();
        assert!(!doc.has_body());
    }
}
