use std::sync::Arc;

use storage::repository::Storage;

use crate::completion_service::CompletionService;
use crate::dataset::{DatasetLoader, DatasetSource};
use crate::error::AppServicesError;
use crate::question_board::QuestionBoard;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    loader: Arc<DatasetLoader>,
    completion: Arc<CompletionService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the dataset at `data_location`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, data_location: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(
            &storage,
            DatasetLoader::from_location(data_location),
        ))
    }

    /// Build services over in-memory storage.
    #[must_use]
    pub fn in_memory(source: Arc<dyn DatasetSource>) -> Self {
        Self::from_storage(&Storage::in_memory(), DatasetLoader::new(source))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, loader: DatasetLoader) -> Self {
        Self {
            loader: Arc::new(loader),
            completion: Arc::new(CompletionService::new(Arc::clone(&storage.kv))),
        }
    }

    #[must_use]
    pub fn loader(&self) -> Arc<DatasetLoader> {
        Arc::clone(&self.loader)
    }

    #[must_use]
    pub fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }

    /// Load the dataset and build the page state.
    pub async fn load_board(&self) -> QuestionBoard {
        QuestionBoard::load(&self.loader, self.completion()).await
    }
}
