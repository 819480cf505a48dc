use std::sync::Arc;

use tracker_core::model::Question;
use tracker_core::{QuestionFilter, QuestionRow, TablePort, distinct_tags, project, sort_questions};

use crate::completion_service::CompletionService;
use crate::dataset::DatasetLoader;
use crate::error::CompletionError;

/// Completed vs. total questions in the dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

/// Page state: the sorted dataset plus the completion store its rows use.
///
/// The dataset is sorted once on construction and never re-sorted; every
/// render filters it in that order.
#[derive(Clone)]
pub struct QuestionBoard {
    questions: Arc<Vec<Question>>,
    completion: Arc<CompletionService>,
}

impl QuestionBoard {
    #[must_use]
    pub fn new(questions: Vec<Question>, completion: Arc<CompletionService>) -> Self {
        Self {
            questions: Arc::new(sort_questions(questions)),
            completion,
        }
    }

    #[must_use]
    pub fn empty(completion: Arc<CompletionService>) -> Self {
        Self::new(Vec::new(), completion)
    }

    /// Load the dataset once and build the board.
    ///
    /// A failed load is logged and yields an empty board; it never aborts the page.
    pub async fn load(loader: &DatasetLoader, completion: Arc<CompletionService>) -> Self {
        match loader.load().await {
            Ok(questions) => {
                tracing::info!(
                    count = questions.len(),
                    source = %loader.describe(),
                    "loaded questions"
                );
                Self::new(questions, completion)
            }
            Err(err) => {
                tracing::error!(%err, source = %loader.describe(), "error loading questions");
                Self::empty(completion)
            }
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Tag filter choices.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        distinct_tags(&self.questions)
    }

    #[must_use]
    pub fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }

    /// Re-render the table: clear every row, then append one row per question
    /// matching the port's current filters.
    ///
    /// A row whose completion state cannot be read renders unchecked.
    pub async fn render<P: TablePort + ?Sized>(&self, port: &mut P) {
        let filter = QuestionFilter::from_values(&port.read_filter_values());
        port.clear_rows();

        for question in project(&self.questions, &filter) {
            let completed = match self.completion.load(question.id()).await {
                Ok(completed) => completed,
                Err(err) => {
                    tracing::error!(id = %question.id(), %err, "failed to read completion state");
                    false
                }
            };
            port.append_row(QuestionRow::render(question, completed));
        }
    }

    /// Completion progress over the whole dataset.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError` if the completion state cannot be read.
    pub async fn progress(&self) -> Result<Progress, CompletionError> {
        let completed = self
            .completion
            .completed_count(self.questions.iter().map(Question::id))
            .await?;
        Ok(Progress {
            completed,
            total: self.questions.len(),
        })
    }
}
