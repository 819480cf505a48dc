use serde::Deserialize;
use thiserror::Error;

use crate::model::difficulty::Difficulty;
use crate::model::ids::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {0} has no pattern")]
    EmptyPattern(QuestionId),
}

/// Wire shape of a question as it appears in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub pattern: Vec<String>,
    pub difficulty: String,
}

/// A practice problem. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    title: String,
    slug: String,
    solution: Option<String>,
    pattern: Vec<String>,
    difficulty: Difficulty,
    difficulty_label: String,
}

impl Question {
    /// Create a validated question.
    ///
    /// An empty `solution` string counts as no solution. The displayed
    /// difficulty label is the tier's canonical label.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPattern` if `pattern` has no labels.
    pub fn new(
        id: QuestionId,
        title: impl Into<String>,
        slug: impl Into<String>,
        solution: Option<String>,
        pattern: Vec<String>,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionError> {
        if pattern.is_empty() {
            return Err(QuestionError::EmptyPattern(id));
        }
        Ok(Self {
            id,
            title: title.into(),
            slug: slug.into(),
            solution: solution.filter(|url| !url.is_empty()),
            pattern,
            difficulty_label: difficulty.as_str().to_owned(),
            difficulty,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    #[must_use]
    pub fn pattern(&self) -> &[String] {
        &self.pattern
    }

    /// First pattern label; the sort tiebreaker.
    #[must_use]
    pub fn primary_pattern(&self) -> &str {
        self.pattern.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    /// Difficulty text as written in the dataset.
    #[must_use]
    pub fn difficulty_label(&self) -> &str {
        &self.difficulty_label
    }

    /// True if any pattern label equals `tag` ignoring case.
    #[must_use]
    pub fn has_pattern(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.pattern.iter().any(|label| label.to_lowercase() == tag)
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let mut question = Self::new(
            record.id,
            record.title,
            record.slug,
            record.solution,
            record.pattern,
            Difficulty::parse(&record.difficulty),
        )?;
        question.difficulty_label = record.difficulty;
        Ok(question)
    }
}
