use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracker_core::model::{Question, QuestionRecord};

use super::source::{DatasetSource, source_for};
use crate::error::DatasetError;

#[derive(Deserialize)]
struct Payload {
    data: Vec<Value>,
}

/// Loads the question collection from its source, once per page lifetime.
#[derive(Clone)]
pub struct DatasetLoader {
    source: Arc<dyn DatasetSource>,
}

impl DatasetLoader {
    #[must_use]
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn from_location(location: &str) -> Self {
        Self::new(source_for(location))
    }

    #[must_use]
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Fetch and parse the dataset, returning its `data` records in file order.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the source cannot be read or the payload is
    /// not a `{ "data": [...] }` document.
    pub async fn load(&self) -> Result<Vec<Question>, DatasetError> {
        let payload = self.source.fetch().await?;
        parse_dataset(&payload)
    }
}

/// Parse a `{ "data": [...] }` document.
///
/// Records that do not deserialize or that fail validation are skipped with a
/// warning; the rest are kept in order.
///
/// # Errors
///
/// Returns `DatasetError::Parse` if the document itself is malformed.
pub fn parse_dataset(payload: &str) -> Result<Vec<Question>, DatasetError> {
    let payload: Payload = serde_json::from_str(payload)?;
    let total = payload.data.len();

    let questions: Vec<Question> = payload
        .data
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record = match serde_json::from_value::<QuestionRecord>(value) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!(index, %err, "skipping malformed question record");
                    return None;
                }
            };
            match Question::try_from(record) {
                Ok(question) => Some(question),
                Err(err) => {
                    tracing::warn!(index, %err, "skipping invalid question record");
                    None
                }
            }
        })
        .collect();

    if questions.len() < total {
        tracing::warn!(
            kept = questions.len(),
            total,
            "dataset contained records that were skipped"
        );
    }

    Ok(questions)
}
