//! Row model for the question table and the port the projector renders into.

use crate::filter::FilterValues;
use crate::model::{Question, QuestionId};

pub const PROBLEM_BASE_URL: &str = "https://leetcode.com/problems/";
pub const COMING_SOON: &str = "Coming Soon";

/// External problem page for a slug.
#[must_use]
pub fn problem_url(slug: &str) -> String {
    format!("{PROBLEM_BASE_URL}{slug}/")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolutionCell {
    Link(String),
    ComingSoon,
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRow {
    pub id: QuestionId,
    /// Space-joined lowercase pattern labels (`data-tag`).
    pub data_tag: String,
    /// Lowercase difficulty (`difficulty-tag`).
    pub difficulty_tag: String,
    /// Checkbox tooltip key, `q<id>`.
    pub tip: String,
    pub completed: bool,
    pub title: String,
    pub problem_url: String,
    pub solution: SolutionCell,
    pub tags: String,
    pub difficulty: String,
}

impl QuestionRow {
    #[must_use]
    pub fn render(question: &Question, completed: bool) -> Self {
        let solution = match question.solution() {
            Some(url) => SolutionCell::Link(url.to_owned()),
            None => SolutionCell::ComingSoon,
        };

        Self {
            id: question.id().clone(),
            data_tag: question.pattern().join(" ").to_lowercase(),
            difficulty_tag: question.difficulty().tag(),
            tip: format!("q{}", question.id()),
            completed,
            title: question.title().to_owned(),
            problem_url: problem_url(question.slug()),
            solution,
            tags: question.pattern().join(", "),
            difficulty: question.difficulty_label().to_owned(),
        }
    }
}

/// Rendering capabilities the table projector needs from its host.
pub trait TablePort {
    /// Remove every rendered row.
    fn clear_rows(&mut self);

    /// Append `row` after the last rendered row. No deduplication.
    fn append_row(&mut self, row: QuestionRow);

    /// Current values of the tag and difficulty controls.
    fn read_filter_values(&self) -> FilterValues;
}
