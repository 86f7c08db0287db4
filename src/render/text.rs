//! Print-styled plain text rendering.
//!
//! Turns the paginator's output into fixed-page text blocks separated by
//! form feeds, mirroring the structure of the print output: optional
//! cover page, preamble page for the document body, question pages, and
//! answer-key pages.

use rayon::prelude::*;
use regex::Regex;

use super::answer_key::chunk_answer_key;
use super::RenderOptions;
use crate::error::Result;
use crate::layout::{Page, RenderItem};
use crate::model::{AnswerKeyMode, Document, Question, QuestionKind};

/// Page separator in text output.
const PAGE_BREAK: &str = "\u{c}\n";

/// Render a normalized document and its pages to paginated plain text.
pub fn to_text(document: &Document, pages: &[Page], options: &RenderOptions) -> Result<String> {
    let mut blocks: Vec<String> = Vec::new();

    if document.settings.cover_page_enabled {
        blocks.push(cover_block(document));
    }

    if document.has_body() {
        blocks.push(preamble_block(document, options));
    }

    let question_blocks: Vec<String> = if options.parallel {
        pages
            .par_iter()
            .map(|page| page_block(document, page, options))
            .collect()
    } else {
        pages
            .iter()
            .map(|page| page_block(document, page, options))
            .collect()
    };
    blocks.extend(question_blocks);

    if document.settings.answer_key_mode == AnswerKeyMode::Appended {
        blocks.extend(answer_key_blocks(document));
    }

    Ok(join_with_footers(blocks))
}

/// Render only the answer-key pages, for the separate-output mode.
pub fn answer_key_text(document: &Document) -> Result<String> {
    Ok(join_with_footers(answer_key_blocks(document)))
}

fn join_with_footers(blocks: Vec<String>) -> String {
    let total = blocks.len();
    blocks
        .into_iter()
        .enumerate()
        .map(|(i, block)| format!("{}\n{} / {}\n", block.trim_end(), i + 1, total))
        .collect::<Vec<_>>()
        .join(PAGE_BREAK)
}

fn cover_block(document: &Document) -> String {
    let mut out = String::new();
    let title = if document.title.is_empty() {
        "Untitled Quiz"
    } else {
        &document.title
    };
    out.push_str(&format!("{}\n{}\n\n", title, "=".repeat(title.chars().count())));
    if let Some(description) = document.settings.description.as_deref() {
        if !description.is_empty() {
            out.push_str(description);
            out.push_str("\n\n");
        }
    }
    out.push_str(&format!("{}\n", chrono::Local::now().format("%Y-%m-%d")));
    out.push_str("Generated by quizlay\n");
    out
}

fn preamble_block(document: &Document, options: &RenderOptions) -> String {
    let mut out = String::new();
    if !document.title.is_empty() {
        out.push_str(&format!("{}\n\n", document.title));
    }
    out.push_str(&wrap(&strip_markup(&document.body_content), options.text_width));
    out.push('\n');
    out
}

fn page_block(document: &Document, page: &Page, options: &RenderOptions) -> String {
    let mut out = String::new();
    if !document.title.is_empty() {
        out.push_str(&format!("{}\n\n", document.title));
    }

    for item in &page.items {
        match item {
            RenderItem::SectionHeader { section } => {
                if document.settings.show_section_titles {
                    out.push_str(&format!(
                        "{}\n{}\n",
                        section.title,
                        "-".repeat(section.title.chars().count().max(3))
                    ));
                    if let Some(description) = section.description.as_deref() {
                        if !description.is_empty() {
                            out.push_str(description);
                            out.push('\n');
                        }
                    }
                    out.push('\n');
                }
            }
            RenderItem::Question { question } => {
                out.push_str(&question_block(document, question, options));
                out.push('\n');
            }
        }
    }
    out
}

fn question_block(document: &Document, question: &Question, options: &RenderOptions) -> String {
    let mut out = String::new();
    if document.settings.show_question_numbers {
        out.push_str(&format!("{}. {}\n", question.number, question.text));
    } else {
        out.push_str(&format!("{}\n", question.text));
    }

    match question.kind {
        QuestionKind::MultipleChoice => {
            for (index, option) in question.options.iter().enumerate() {
                let marker = if options.reveal_answers && index == question.correct_option_index {
                    "*"
                } else {
                    " "
                };
                out.push_str(&format!(
                    "  {}{}) {}\n",
                    marker,
                    Question::option_letter(index),
                    option
                ));
            }
        }
        QuestionKind::TrueFalse => {
            if options.reveal_answers {
                match question.correct_boolean {
                    Some(true) => out.push_str("  [x] True   [ ] False\n"),
                    _ => out.push_str("  [ ] True   [x] False\n"),
                }
            } else {
                out.push_str("  [ ] True   [ ] False\n");
            }
        }
        QuestionKind::ShortAnswer => {
            if options.reveal_answers {
                if let Some(expected) = question.expected_answer.as_deref() {
                    if !expected.is_empty() {
                        out.push_str(&format!("  Answer: {}\n", expected));
                    }
                }
            }
            out.push_str("  ________________________________\n");
            out.push_str("  ________________________________\n");
        }
    }
    out
}

fn answer_key_blocks(document: &Document) -> Vec<String> {
    let questions = document.all_questions();
    chunk_answer_key(&questions)
        .into_iter()
        .map(|chunk| {
            let mut out = String::from("Answer Key\n==========\n\n");
            for question in chunk {
                out.push_str(&format!("{:>3}. {}", question.number, question.answer_text()));
                if let Some(explanation) = question.explanation.as_deref() {
                    if !explanation.is_empty() {
                        out.push_str(&format!(" - {}", explanation));
                    }
                }
                out.push('\n');
            }
            out
        })
        .collect()
}

/// Strip rich-text markup down to plain paragraphs.
fn strip_markup(markup: &str) -> String {
    let breaks = Regex::new(r"(?i)</p>|<br\s*/?>").unwrap();
    let tags = Regex::new(r"<[^>]+>").unwrap();
    let text = breaks.replace_all(markup, "\n");
    let text = tags.replace_all(&text, "");
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn wrap(text: &str, width: usize) -> String {
    let mut out = String::new();
    for line in text.lines() {
        if line.is_empty() {
            out.push('\n');
            continue;
        }
        let mut column = 0;
        for word in line.split_whitespace() {
            let len = word.chars().count();
            if column > 0 && column + 1 + len > width {
                out.push('\n');
                column = 0;
            } else if column > 0 {
                out.push(' ');
                column += 1;
            }
            out.push_str(word);
            column += len;
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::model::{Question, Section};
    use crate::style;

    fn sample_document() -> Document {
        let mut doc = Document::new("Weekly Quiz");
        doc.body_content = "<p>Answer <strong>all</strong> questions.</p>".to_string();
        let mut section = Section::new("General Knowledge");
        section.add_question(
            Question::multiple_choice(
                1,
                "What is the capital of France?",
                vec!["London".into(), "Berlin".into(), "Paris".into()],
                2,
            )
            .with_explanation("Paris has been the capital since 987."),
        );
        section.add_question(Question::true_false(2, "The sky is green.", false));
        section.add_question(Question::short_answer(3, "Name a primary color.", "Red"));
        doc.add_section(section);
        doc
    }

    fn render(doc: &Document, options: &RenderOptions) -> String {
        let preset = style::resolve(&doc.settings.selected_preset_id);
        let pages = layout::paginate(&doc.sections, preset);
        to_text(doc, &pages, options).unwrap()
    }

    #[test]
    fn test_contains_cover_and_questions() {
        let doc = sample_document();
        let text = render(&doc, &RenderOptions::default());

        assert!(text.contains("Weekly Quiz"));
        assert!(text.contains("Generated by quizlay"));
        assert!(text.contains("1. What is the capital of France?"));
        assert!(text.contains("C) Paris"));
        assert!(text.contains("[ ] True   [ ] False"));
        assert!(text.contains("________"));
    }

    #[test]
    fn test_preamble_strips_markup() {
        let doc = sample_document();
        let text = render(&doc, &RenderOptions::default());
        assert!(text.contains("Answer all questions."));
        assert!(!text.contains("<strong>"));
    }

    #[test]
    fn test_answer_key_appended() {
        let doc = sample_document();
        let text = render(&doc, &RenderOptions::default());
        assert!(text.contains("Answer Key"));
        assert!(text.contains("  1. C - Paris has been the capital since 987."));
        assert!(text.contains("  2. False"));
        assert!(text.contains("  3. Red"));
    }

    #[test]
    fn test_answer_key_hidden() {
        let mut doc = sample_document();
        doc.settings.answer_key_mode = AnswerKeyMode::Hidden;
        let text = render(&doc, &RenderOptions::default());
        assert!(!text.contains("Answer Key"));
    }

    #[test]
    fn test_reveal_answers_marks_correct_option() {
        let doc = sample_document();
        let text = render(&doc, &RenderOptions::new().with_reveal_answers(true));
        assert!(text.contains("*C) Paris"));
        assert!(text.contains("[x] False"));
        assert!(text.contains("Answer: Red"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let doc = sample_document();
        let parallel = render(&doc, &RenderOptions::default());
        let sequential = render(&doc, &RenderOptions::new().sequential());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_page_footers_count_all_blocks() {
        let doc = sample_document();
        let text = render(&doc, &RenderOptions::default());
        // Cover, preamble, one question page, one answer page.
        assert!(text.contains("1 / 4"));
        assert!(text.contains("4 / 4"));
    }

    #[test]
    fn test_wrap_width() {
        let wrapped = wrap("one two three four five six seven", 10);
        for line in wrapped.lines() {
            assert!(line.chars().count() <= 10);
        }
    }
}
