//! Line-oriented plain-text quiz import.
//!
//! Recognizes numbered question lines ("1. ..." or "1) ..."), lettered
//! option lines ("A) ..." / "a. ..."), and answer lines in several
//! languages ("Answer: B", "Cevap: C"). Lines before the first question
//! become document body text. Parsing is best-effort: question blocks
//! that never collect two options are dropped rather than failing the
//! import.

use regex::Regex;

use crate::model::{new_id, Question, QuestionKind, Section};

/// Result of parsing a plain-text file.
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Leading free-form lines, before the first question.
    pub body_lines: Vec<String>,

    /// The imported section, when at least one question was recognized.
    pub section: Option<Section>,
}

impl ImportResult {
    /// Number of questions recognized.
    pub fn question_count(&self) -> usize {
        self.section.as_ref().map_or(0, |s| s.questions.len())
    }
}

struct PendingQuestion {
    number: u32,
    text: String,
    options: Vec<String>,
    correct: Option<usize>,
}

impl PendingQuestion {
    fn finalize(self) -> Option<Question> {
        // A usable multiple-choice block needs at least two options.
        if self.text.is_empty() || self.options.len() < 2 {
            return None;
        }
        Some(Question {
            id: new_id(),
            kind: QuestionKind::MultipleChoice,
            number: self.number,
            text: self.text,
            options: self.options,
            // Unanswered blocks default to the first option.
            correct_option_index: self.correct.unwrap_or(0),
            correct_boolean: None,
            expected_answer: None,
            explanation: None,
        })
    }
}

/// Parse plain text into body lines and an imported section.
pub fn parse_txt(text: &str) -> ImportResult {
    let question_start = Regex::new(r"^(\d+)[.)]\s+(.+)$").unwrap();
    let option_line = Regex::new(r"^([A-Ea-e])[.)]\s+(.+)$").unwrap();
    let answer_line =
        Regex::new(r"(?i)^(Answer|Correct|Cevap|Yanıt|Doğru Cevap)[\s:]*([A-Ea-e])\b").unwrap();

    let mut body_lines: Vec<String> = Vec::new();
    let mut questions: Vec<Question> = Vec::new();
    let mut pending: Option<PendingQuestion> = None;
    let mut in_questions = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(captures) = question_start.captures(line) {
            in_questions = true;
            if let Some(done) = pending.take().and_then(PendingQuestion::finalize) {
                questions.push(done);
            }
            pending = Some(PendingQuestion {
                number: captures[1].parse().unwrap_or(0),
                text: captures[2].to_string(),
                options: Vec::new(),
                correct: None,
            });
            continue;
        }

        if in_questions {
            if let Some(current) = pending.as_mut() {
                if let Some(captures) = option_line.captures(line) {
                    current.options.push(captures[2].to_string());
                    continue;
                }
                if let Some(captures) = answer_line.captures(line) {
                    let letter = captures[2].to_uppercase().chars().next().unwrap_or('A');
                    let index = (letter as u8 - b'A') as usize;
                    if index < 5 {
                        current.correct = Some(index);
                    }
                    continue;
                }
                // Continuation of a multi-line question stem, but only
                // before options start.
                if current.options.is_empty() {
                    current.text.push(' ');
                    current.text.push_str(line);
                }
            }
        } else {
            body_lines.push(line.to_string());
        }
    }

    if let Some(done) = pending.take().and_then(PendingQuestion::finalize) {
        questions.push(done);
    }

    log::info!(
        "txt import: {} questions, {} body lines",
        questions.len(),
        body_lines.len()
    );

    let section = if questions.is_empty() {
        None
    } else {
        let mut section = Section::new("Imported Questions");
        section.questions = questions;
        Some(section)
    };

    ImportResult {
        body_lines,
        section,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Welcome to the quiz.
Read every question carefully.

1. What is the capital of France?
A) London
B) Paris
C) Berlin
Answer: B

2) Which planet is known as the Red Planet?
a. Venus
b. Mars
Cevap: b

3. This block only has one option
A) Lonely
";

    #[test]
    fn test_parses_questions_and_body() {
        let result = parse_txt(SAMPLE);
        assert_eq!(result.body_lines.len(), 2);
        assert_eq!(result.question_count(), 2);

        let section = result.section.unwrap();
        let q1 = &section.questions[0];
        assert_eq!(q1.text, "What is the capital of France?");
        assert_eq!(q1.options.len(), 3);
        assert_eq!(q1.correct_option_index, 1);

        let q2 = &section.questions[1];
        assert_eq!(q2.options, vec!["Venus".to_string(), "Mars".to_string()]);
        assert_eq!(q2.correct_option_index, 1);
    }

    #[test]
    fn test_single_option_block_dropped() {
        let result = parse_txt(SAMPLE);
        let section = result.section.unwrap();
        assert!(!section
            .questions
            .iter()
            .any(|q| q.text.contains("only has one option")));
    }

    #[test]
    fn test_multiline_question_stem() {
        let text = "1. A question that continues\nonto a second line\nA) yes\nB) no\n";
        let result = parse_txt(text);
        let section = result.section.unwrap();
        assert_eq!(
            section.questions[0].text,
            "A question that continues onto a second line"
        );
    }

    #[test]
    fn test_unanswered_defaults_to_first_option() {
        let text = "1. Pick one\nA) first\nB) second\n";
        let result = parse_txt(text);
        assert_eq!(result.section.unwrap().questions[0].correct_option_index, 0);
    }

    #[test]
    fn test_no_questions_yields_no_section() {
        let result = parse_txt("Just some prose.\nNothing else.\n");
        assert!(result.section.is_none());
        assert_eq!(result.body_lines.len(), 2);
    }
}
