//! Section types.

use super::Question;
use serde::{Deserialize, Serialize};

/// A named, ordered group of questions rendered with its own header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Session-unique identifier.
    pub id: String,

    /// Section title.
    pub title: String,

    /// Optional description shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Questions in display order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Section {
    /// Create a new empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            title: title.into(),
            description: None,
            questions: Vec::new(),
        }
    }

    /// Set the section description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a question to the section.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Number of questions in the section.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Check if the section has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
