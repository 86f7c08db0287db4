//! Built-in starter templates.
//!
//! Templates are constant descriptions; instantiating one produces a
//! fresh document with new ids so repeated instantiation never collides.

use crate::error::{Error, Result};
use crate::model::{Document, Question, Section};

/// A starter template for a new document.
#[derive(Debug, Clone, Copy)]
pub struct DocumentTemplate {
    /// Template identifier.
    pub id: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// One-line description for template pickers.
    pub description: &'static str,

    /// Number of questions the template starts with.
    pub question_count: usize,
}

static TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        id: "weekly-practice",
        name: "Weekly Practice Quiz",
        description: "A standard 5-question multiple choice quiz perfect for weekly reviews.",
        question_count: 5,
    },
    DocumentTemplate {
        id: "exam-style",
        name: "Exam Style Quiz",
        description: "A comprehensive 10-question set with a formal cover page and answer key.",
        question_count: 10,
    },
];

/// All built-in templates.
pub fn all_templates() -> &'static [DocumentTemplate] {
    TEMPLATES
}

/// Find a template by id.
pub fn find_template(id: &str) -> Result<&'static DocumentTemplate> {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| Error::UnknownTemplate(id.to_string()))
}

impl DocumentTemplate {
    /// Build a fresh document from this template.
    pub fn instantiate(&self) -> Document {
        match self.id {
            "weekly-practice" => weekly_practice(),
            "exam-style" => exam_style(),
            _ => Document::default(),
        }
    }
}

fn weekly_practice() -> Document {
    let mut doc = Document::new("Weekly Practice Quiz");
    doc.body_content = "<p>Welcome to this week's practice quiz. Complete all questions and check your answers at the end.</p>".to_string();
    doc.settings.description = Some("Weekly Practice Quiz".to_string());

    let mut section = Section::new("General Knowledge");
    section.add_question(Question::multiple_choice(
        1,
        "What is the capital of France?",
        vec!["London".into(), "Berlin".into(), "Paris".into(), "Madrid".into()],
        2,
    ));
    section.add_question(Question::multiple_choice(
        2,
        "Which planet is known as the Red Planet?",
        vec!["Venus".into(), "Mars".into(), "Jupiter".into(), "Saturn".into()],
        1,
    ));
    section.add_question(Question::multiple_choice(
        3,
        "What is 2 + 2?",
        vec!["3".into(), "4".into(), "5".into(), "6".into()],
        1,
    ));
    section.add_question(Question::multiple_choice(
        4,
        "Who wrote \"Romeo and Juliet\"?",
        vec![
            "Charles Dickens".into(),
            "Jane Austen".into(),
            "William Shakespeare".into(),
            "Mark Twain".into(),
        ],
        2,
    ));
    section.add_question(Question::multiple_choice(
        5,
        "What is the chemical symbol for Gold?",
        vec!["Ag".into(), "Fe".into(), "Au".into(), "Cu".into()],
        2,
    ));
    doc.add_section(section);
    doc
}

fn exam_style() -> Document {
    let mut doc = Document::new("Mid-Term Examination");
    doc.body_content = "<p><strong>Instructions:</strong> Please read each question carefully. You have 30 minutes to complete this exam.</p>".to_string();
    doc.settings.description = Some("Exam Style Quiz".to_string());

    let mut section = Section::new("Part A: Multiple Choice");
    for i in 1..=10u32 {
        section.add_question(Question::multiple_choice(
            i,
            format!("Question {}: [Replace this with your question text]", i),
            vec![
                "Option A".into(),
                "Option B".into(),
                "Option C".into(),
                "Option D".into(),
            ],
            0,
        ));
    }
    doc.add_section(section);
    doc
}
