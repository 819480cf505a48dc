use std::sync::Arc;

use services::{CompletionService, DatasetLoader};

pub trait UiApp: Send + Sync {
    fn dataset_loader(&self) -> Arc<DatasetLoader>;
    fn completion(&self) -> Arc<CompletionService>;
}

#[derive(Clone)]
pub struct AppContext {
    loader: Arc<DatasetLoader>,
    completion: Arc<CompletionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            loader: app.dataset_loader(),
            completion: app.completion(),
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
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
