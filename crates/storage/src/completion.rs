use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracker_core::model::QuestionId;

use crate::repository::StorageError;

/// Storage key holding the whole completion mapping.
pub const COMPLETION_KEY: &str = "checkboxStates";

/// Persisted shape of completion state: question id -> completed flag.
///
/// Always read and written as one JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMap(BTreeMap<String, bool>);

impl CompletionMap {
    /// Decode a stored blob.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the blob is not a JSON object
    /// of booleans.
    pub fn decode(blob: &str) -> Result<Self, StorageError> {
        serde_json::from_str(blob).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Encode for storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails.
    pub fn encode(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> bool {
        self.0.get(id.as_str()).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: &QuestionId, completed: bool) {
        self.0.insert(id.as_str().to_owned(), completed);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
