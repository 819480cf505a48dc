use std::sync::Arc;

use tokio::sync::Mutex;

use storage::repository::KeyValueStore;
use storage::{COMPLETION_KEY, CompletionMap};
use tracker_core::model::QuestionId;

use crate::error::CompletionError;

/// Per-question completion flags, kept as one mapping under a fixed key.
///
/// Every call reads the whole mapping; `save` writes the whole mapping back.
/// Saves through one service (and its clones) are serialized, so toggles
/// never drop each other's entries. Writers outside the service still race:
/// the last write wins.
#[derive(Clone)]
pub struct CompletionService {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl CompletionService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Record whether a question is completed.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Storage` if the mapping cannot be read or written.
    pub async fn save(&self, id: &QuestionId, completed: bool) -> Result<(), CompletionError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.set(id, completed);
        self.kv.set(COMPLETION_KEY, &map.encode()?).await?;
        tracing::debug!(%id, completed, "saved completion state");
        Ok(())
    }

    /// Stored flag for `id`, or `false` when nothing has been recorded.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Storage` if the mapping cannot be read.
    pub async fn load(&self, id: &QuestionId) -> Result<bool, CompletionError> {
        Ok(self.read_map().await?.get(id))
    }

    /// How many of `ids` are marked completed.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Storage` if the mapping cannot be read.
    pub async fn completed_count<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a QuestionId>,
    ) -> Result<usize, CompletionError> {
        let map = self.read_map().await?;
        Ok(ids.into_iter().filter(|id| map.get(id)).count())
    }

    async fn read_map(&self) -> Result<CompletionMap, CompletionError> {
        let Some(blob) = self.kv.get(COMPLETION_KEY).await? else {
            return Ok(CompletionMap::default());
        };

        match CompletionMap::decode(&blob) {
            Ok(map) => Ok(map),
            Err(err) => {
                tracing::warn!(%err, "completion state is corrupt; treating it as empty");
                Ok(CompletionMap::default())
            }
        }
    }
}
