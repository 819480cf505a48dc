use std::cmp::Ordering;

use crate::model::Question;

/// Orders by difficulty rank, then by lowercase primary pattern (code point order).
#[must_use]
pub fn compare_questions(a: &Question, b: &Question) -> Ordering {
    a.difficulty()
        .rank()
        .cmp(&b.difficulty().rank())
        .then_with(|| {
            a.primary_pattern()
                .to_lowercase()
                .cmp(&b.primary_pattern().to_lowercase())
        })
}

/// Sort the full dataset once after load.
///
/// Stable: questions that compare equal keep their dataset order.
#[must_use]
pub fn sort_questions(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_cached_key(|q| (q.difficulty().rank(), q.primary_pattern().to_lowercase()));
    questions
}
