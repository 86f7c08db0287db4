//! Section-aware greedy pagination.

use serde::Serialize;

use super::estimate::{CharWidthEstimator, HeightEstimator};
use super::geometry::{PageGeometry, SECTION_HEADER_HEIGHT};
use crate::model::{Question, Section};
use crate::style::StylePreset;

/// One placeable unit of page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RenderItem {
    /// A section header (title plus optional description).
    SectionHeader {
        /// The section this header belongs to.
        section: Section,
    },

    /// A single question, always placed whole.
    Question {
        /// The question to render.
        question: Question,
    },
}

impl RenderItem {
    /// The id of the owning section, when this item is a header.
    pub fn section_id(&self) -> Option<&str> {
        match self {
            RenderItem::SectionHeader { section } => Some(&section.id),
            RenderItem::Question { .. } => None,
        }
    }

    /// The contained question, when this item is one.
    pub fn as_question(&self) -> Option<&Question> {
        match self {
            RenderItem::Question { question } => Some(question),
            RenderItem::SectionHeader { .. } => None,
        }
    }
}

/// An ordered list of render items meant to fit one physical page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    /// Items in rendering order.
    pub items: Vec<RenderItem>,
}

impl Page {
    /// Check if the page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of question items on the page.
    pub fn question_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, RenderItem::Question { .. }))
            .count()
    }

    /// Questions on the page, in order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.items.iter().filter_map(RenderItem::as_question)
    }
}

/// Group sections and questions into pages using the default height
/// estimator.
///
/// Deterministic and pure: no state survives the call, so independent
/// callers (on-screen preview, background export) may run it
/// concurrently. Pagination only reads question numbers, never rewrites
/// them.
pub fn paginate(sections: &[Section], preset: &StylePreset) -> Vec<Page> {
    paginate_with(&CharWidthEstimator, sections, preset)
}

/// Group sections and questions into pages using a caller-supplied
/// height estimator.
///
/// Placement rules:
/// - every section after the first starts on a fresh page; no page mixes
///   content from two sections
/// - a question is atomic: it is never split across pages, and a
///   question taller than a whole page is still placed whole (overflow
///   is tolerated, never truncated)
/// - a section with no questions still emits its header, which can yield
///   header-only pages
pub fn paginate_with<E: HeightEstimator>(
    estimator: &E,
    sections: &[Section],
    preset: &StylePreset,
) -> Vec<Page> {
    let geometry = PageGeometry::for_preset(preset);

    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page::default();
    let mut current_height = geometry.header_reserve;

    for (section_index, section) in sections.iter().enumerate() {
        // Sections never share a page tail with a preceding section.
        if section_index > 0 && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            current_height = geometry.header_reserve;
        }

        // Only matters if the header reserve is unusually large. The
        // emptiness guard keeps a zero-item page from ever being emitted.
        if current_height + SECTION_HEADER_HEIGHT > geometry.usable_height && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            current_height = geometry.header_reserve;
        }

        current.items.push(RenderItem::SectionHeader {
            section: section.clone(),
        });
        current_height += SECTION_HEADER_HEIGHT;

        for question in &section.questions {
            let question_height = estimator.estimate(question, preset);

            if current_height + question_height > geometry.usable_height && !current.is_empty() {
                pages.push(std::mem::take(&mut current));
                current_height = geometry.header_reserve;
            }

            current.items.push(RenderItem::Question {
                question: question.clone(),
            });
            current_height += question_height;
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }

    log::debug!(
        "paginated {} sections into {} pages (preset {})",
        sections.len(),
        pages.len(),
        preset.id
    );

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;
    use crate::style;

    fn section_with_questions(title: &str, count: usize, text: &str) -> Section {
        let mut section = Section::new(title);
        for i in 0..count {
            section.add_question(Question::multiple_choice(
                (i + 1) as u32,
                text,
                vec!["one".into(), "two".into(), "three".into(), "four".into()],
                0,
            ));
        }
        section
    }

    #[test]
    fn test_empty_sections_yield_no_pages() {
        let pages = paginate(&[], style::resolve("standard"));
        assert!(pages.is_empty());
    }

    #[test]
    fn test_small_section_fits_one_page() {
        let section = section_with_questions("Part A", 3, "Short question text?");
        let pages = paginate(&[section], style::resolve("standard"));

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].items.len(), 4);
        assert!(matches!(pages[0].items[0], RenderItem::SectionHeader { .. }));
        assert_eq!(pages[0].question_count(), 3);
    }

    #[test]
    fn test_large_section_spills_and_preserves_order() {
        let section = section_with_questions(
            "Part A",
            40,
            "A question of fairly typical length that takes a line or two to read?",
        );
        let pages = paginate(&[section.clone()], style::resolve("compact"));

        assert!(pages.len() > 1);
        let numbers: Vec<u32> = pages
            .iter()
            .flat_map(|p| p.questions().map(|q| q.number))
            .collect();
        let expected: Vec<u32> = (1..=40).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn test_sections_never_share_a_page() {
        let first = section_with_questions("Part A", 1, "First question?");
        let second = section_with_questions("Part B", 1, "Second question?");
        let pages = paginate(&[first.clone(), second.clone()], style::resolve("standard"));

        assert!(pages.len() >= 2);
        for page in &pages {
            let mut ids: Vec<&str> = page
                .items
                .iter()
                .map(|item| match item {
                    RenderItem::SectionHeader { section } => section.id.as_str(),
                    RenderItem::Question { .. } => "",
                })
                .filter(|id| !id.is_empty())
                .collect();
            ids.dedup();
            assert!(ids.len() <= 1, "page mixes sections: {:?}", ids);
        }
    }

    #[test]
    fn test_one_header_per_section_in_order() {
        let sections = vec![
            section_with_questions("Part A", 2, "Question?"),
            section_with_questions("Part B", 0, ""),
            section_with_questions("Part C", 1, "Question?"),
        ];
        let pages = paginate(&sections, style::resolve("standard"));

        let headers: Vec<&str> = pages
            .iter()
            .flat_map(|p| p.items.iter())
            .filter_map(RenderItem::section_id)
            .collect();
        let expected: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(headers, expected);
    }

    #[test]
    fn test_empty_section_still_emits_header() {
        let section = Section::new("Empty Part");
        let pages = paginate(&[section], style::resolve("standard"));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].items.len(), 1);
        assert!(matches!(pages[0].items[0], RenderItem::SectionHeader { .. }));
    }

    #[test]
    fn test_oversized_question_placed_whole() {
        let mut section = Section::new("Part A");
        section.add_question(Question::multiple_choice(
            1,
            "word ".repeat(2000),
            vec!["option ".repeat(200); 4],
            0,
        ));
        let pages = paginate(&[section], style::resolve("standard"));

        // One header, one question, no splitting.
        let total_items: usize = pages.iter().map(|p| p.items.len()).sum();
        assert_eq!(total_items, 2);
        let total_questions: usize = pages.iter().map(|p| p.question_count()).sum();
        assert_eq!(total_questions, 1);
    }

    #[test]
    fn test_never_emits_empty_pages() {
        let inputs: Vec<Vec<Section>> = vec![
            vec![],
            vec![Section::new("Empty")],
            vec![Section::new("Empty 1"), Section::new("Empty 2")],
            vec![
                section_with_questions("Part A", 30, "A question of typical length?"),
                section_with_questions("Part B", 1, "Short?"),
            ],
        ];
        for sections in &inputs {
            for preset in crate::style::all_presets() {
                for page in paginate(sections, preset) {
                    assert!(!page.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_pluggable_estimator() {
        struct FixedEstimator(f32);
        impl HeightEstimator for FixedEstimator {
            fn estimate(&self, _: &Question, _: &StylePreset) -> f32 {
                self.0
            }
        }

        // Each question consumes most of a page: the header lands alone,
        // then one question per page.
        let section = section_with_questions("Part A", 3, "q");
        let pages = paginate_with(&FixedEstimator(700.0), &[section], style::resolve("standard"));
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].items.len(), 1);
        for page in &pages[1..] {
            assert_eq!(page.question_count(), 1);
        }
    }
}
