//! Content normalization ahead of layout.

use crate::model::{Document, Question, Section};
use unicode_normalization::UnicodeNormalization;

/// Produce a canonical, independently-owned copy of a document for
/// layout and export.
///
/// All user-entered strings are whitespace-trimmed and NFC-normalized;
/// absent optional strings become empty strings so downstream code never
/// sees `None`. The input is never mutated, and the returned document
/// shares no owned structures with it. Idempotent.
pub fn normalize(document: &Document) -> Document {
    Document {
        title: clean(&document.title),
        body_content: document.body_content.clone(),
        sections: document.sections.iter().map(normalize_section).collect(),
        settings: document.settings.clone(),
    }
}

fn normalize_section(section: &Section) -> Section {
    Section {
        id: section.id.clone(),
        title: clean(&section.title),
        description: Some(clean(section.description.as_deref().unwrap_or(""))),
        questions: section.questions.iter().map(normalize_question).collect(),
    }
}

fn normalize_question(question: &Question) -> Question {
    Question {
        id: question.id.clone(),
        kind: question.kind,
        number: question.number,
        text: clean(&question.text),
        options: question.options.iter().map(|o| clean(o)).collect(),
        correct_option_index: question.correct_option_index,
        correct_boolean: question.correct_boolean,
        expected_answer: Some(clean(question.expected_answer.as_deref().unwrap_or(""))),
        explanation: Some(clean(question.explanation.as_deref().unwrap_or(""))),
    }
}

fn clean(text: &str) -> String {
    text.trim().nfc().collect()
}
