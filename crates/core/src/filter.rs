use std::collections::BTreeMap;

use crate::model::Question;

/// Raw values of the two filter controls. Empty means "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterValues {
    pub tag: String,
    pub difficulty: String,
}

impl FilterValues {
    #[must_use]
    pub fn new(tag: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            difficulty: difficulty.into(),
        }
    }
}

/// Normalized filter criteria, matched case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    tag: Option<String>,
    difficulty: Option<String>,
}

impl QuestionFilter {
    #[must_use]
    pub fn new(tag: &str, difficulty: &str) -> Self {
        Self {
            tag: normalize(tag),
            difficulty: normalize(difficulty),
        }
    }

    #[must_use]
    pub fn from_values(values: &FilterValues) -> Self {
        Self::new(&values.tag, &values.difficulty)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.difficulty.is_none()
    }

    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        let tag_ok = self.tag.as_deref().is_none_or(|tag| question.has_pattern(tag));
        let difficulty_ok = self
            .difficulty
            .as_deref()
            .is_none_or(|difficulty| question.difficulty().tag() == difficulty);
        tag_ok && difficulty_ok
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Visible subset of the sorted dataset, in dataset order.
pub fn project<'a>(
    questions: &'a [Question],
    filter: &'a QuestionFilter,
) -> impl Iterator<Item = &'a Question> + 'a {
    questions.iter().filter(move |q| filter.matches(q))
}

/// Distinct pattern labels across the dataset, deduplicated ignoring case and
/// sorted alphabetically. The first spelling seen wins.
#[must_use]
pub fn distinct_tags(questions: &[Question]) -> Vec<String> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for label in questions.iter().flat_map(Question::pattern) {
        seen.entry(label.to_lowercase())
            .or_insert_with(|| label.clone());
    }
    seen.into_values().collect()
}
