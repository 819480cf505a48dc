use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::DatasetError;

/// Where the raw dataset payload comes from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;

    /// Fetch the raw payload.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the payload cannot be read.
    async fn fetch(&self) -> Result<String, DatasetError>;
}

/// Dataset file on the local filesystem.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, DatasetError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DatasetError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Dataset served over HTTP(S).
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Use a preconfigured client (proxy, timeouts, TLS roots).
    #[must_use]
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, DatasetError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(DatasetError::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }
}

/// Payload held in memory; used by tests and previews.
#[derive(Clone, Debug)]
pub struct StaticSource {
    payload: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    fn describe(&self) -> String {
        "<in-memory>".to_owned()
    }

    async fn fetch(&self) -> Result<String, DatasetError> {
        Ok(self.payload.clone())
    }
}

/// Pick a source for a configured location: `http://` and `https://` go over
/// the network, anything else is a file path.
#[must_use]
pub fn source_for(location: &str) -> Arc<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpSource::new(location))
    } else {
        Arc::new(FileSource::new(location))
    }
}
