//! Question types.

use serde::{Deserialize, Serialize};

/// The kind of a question, controlling both rendering and height estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// A question with 2-5 answer options, one of them correct.
    #[default]
    MultipleChoice,

    /// A statement answered with True or False.
    TrueFalse,

    /// A question answered in free-form writing space.
    ShortAnswer,
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Session-unique identifier.
    pub id: String,

    /// Question kind.
    #[serde(default)]
    pub kind: QuestionKind,

    /// Display number (1-based). Assigned by [`Document::renumber`]
    /// whenever the structure changes; the layout engine only reads it.
    ///
    /// [`Document::renumber`]: super::Document::renumber
    pub number: u32,

    /// Question text.
    pub text: String,

    /// Answer options (multiple-choice only, 2-5 entries).
    #[serde(default)]
    pub options: Vec<String>,

    /// Index into `options` of the correct answer (multiple-choice).
    #[serde(default)]
    pub correct_option_index: usize,

    /// Correct answer for true-false questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_boolean: Option<bool>,

    /// Expected answer for short-answer questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<String>,

    /// Optional explanation shown in the answer key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Create a multiple-choice question.
    pub fn multiple_choice(
        number: u32,
        text: impl Into<String>,
        options: Vec<String>,
        correct_option_index: usize,
    ) -> Self {
        Self {
            id: super::new_id(),
            kind: QuestionKind::MultipleChoice,
            number,
            text: text.into(),
            options,
            correct_option_index,
            correct_boolean: None,
            expected_answer: None,
            explanation: None,
        }
    }

    /// Create a true-false question.
    pub fn true_false(number: u32, text: impl Into<String>, answer: bool) -> Self {
        Self {
            id: super::new_id(),
            kind: QuestionKind::TrueFalse,
            number,
            text: text.into(),
            options: Vec::new(),
            correct_option_index: 0,
            correct_boolean: Some(answer),
            expected_answer: None,
            explanation: None,
        }
    }

    /// Create a short-answer question.
    pub fn short_answer(number: u32, text: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            kind: QuestionKind::ShortAnswer,
            number,
            text: text.into(),
            options: Vec::new(),
            correct_option_index: 0,
            correct_boolean: None,
            expected_answer: Some(expected.into()),
            explanation: None,
        }
    }

    /// Set the explanation shown in the answer key.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// The letter (A-E) for an option index.
    pub fn option_letter(index: usize) -> char {
        (b'A' + index.min(25) as u8) as char
    }

    /// The correct answer formatted for the answer key.
    pub fn answer_text(&self) -> String {
        match self.kind {
            QuestionKind::MultipleChoice => Self::option_letter(self.correct_option_index).to_string(),
            QuestionKind::TrueFalse => match self.correct_boolean {
                Some(true) => "True".to_string(),
                Some(false) => "False".to_string(),
                None => String::new(),
            },
            QuestionKind::ShortAnswer => self.expected_answer.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_letter() {
        assert_eq!(Question::option_letter(0), 'A');
        assert_eq!(Question::option_letter(4), 'E');
    }

    #[test]
    fn test_option_letter_clamps_large_indices() {
        // Indices past the alphabet clamp to 'Z' instead of wrapping.
        assert_eq!(Question::option_letter(25), 'Z');
        assert_eq!(Question::option_letter(26), 'Z');
        assert_eq!(Question::option_letter(300), 'Z');
    }

    #[test]
    fn test_answer_text() {
        let q = Question::multiple_choice(
            1,
            "Capital of France?",
            vec!["London".into(), "Paris".into()],
            1,
        );
        assert_eq!(q.answer_text(), "B");

        let q = Question::true_false(2, "The sky is green.", false);
        assert_eq!(q.answer_text(), "False");

        let q = Question::short_answer(3, "Chemical symbol for gold?", "Au");
        assert_eq!(q.answer_text(), "Au");
    }

    #[test]
    fn test_kind_serde_tag() {
        let q = Question::true_false(1, "x", true);
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"true-false\""));
    }
}
