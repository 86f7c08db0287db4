//! Answer-key page grouping.

use crate::model::Question;

/// Number of answers per answer-key page.
///
/// Answer rows are a single line each, so the key uses a fixed count per
/// page rather than height estimation. This is intentionally a different
/// mechanism from body pagination; keep the two separate.
pub const ANSWERS_PER_PAGE: usize = 30;

/// Split the flattened question list into fixed-size answer-key chunks.
pub fn chunk_answer_key<'a>(questions: &[&'a Question]) -> Vec<Vec<&'a Question>> {
    questions
        .chunks(ANSWERS_PER_PAGE)
        .map(|chunk| chunk.to_vec())
        .collect()
}
