//! Dataset loading
//!
//! A search re-reads the dataset every time: there is no cache and no retry.
//! Failures come back as [`TravelRecError::Transport`] when the document could
//! not be fetched and [`TravelRecError::Parse`] when it could not be decoded.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::{TravelRecConfig, is_http_source};
use crate::models::Dataset;
use crate::{Result, TravelRecError};

/// Source of the recommendation dataset
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    /// Fetch and decode the dataset, one attempt
    async fn load(&self) -> Result<Dataset>;

    /// Human readable location, used in logs
    fn location(&self) -> String;
}

/// Loads the dataset document over HTTP
pub struct HttpDatasetLoader {
    client: Client,
    url: String,
}

impl HttpDatasetLoader {
    /// Create a loader for `url` with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("travelrec/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelRecError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(url, client))
    }

    /// Create a loader around an already configured client
    #[must_use]
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DatasetLoader for HttpDatasetLoader {
    #[instrument(name = "load_dataset_http", skip(self), fields(url = %self.url))]
    async fn load(&self) -> Result<Dataset> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| TravelRecError::transport(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TravelRecError::transport(format!(
                "Failed to fetch JSON: {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TravelRecError::transport(format!("Failed to read body: {e}")))?;
        debug!("Fetched {} bytes", body.len());

        Dataset::from_json(&body)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Loads the dataset document from the local filesystem
pub struct FileDatasetLoader {
    path: PathBuf,
}

impl FileDatasetLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetLoader for FileDatasetLoader {
    #[instrument(name = "load_dataset_file", skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Dataset> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| {
            TravelRecError::transport(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        debug!("Read {} bytes", body.len());

        Dataset::from_json(&body)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a loader for a dataset location: HTTP for URLs, the filesystem otherwise
pub fn loader_for_source(source: &str, timeout: Duration) -> Result<Box<dyn DatasetLoader>> {
    if is_http_source(source) {
        Ok(Box::new(HttpDatasetLoader::new(source, timeout)?))
    } else {
        Ok(Box::new(FileDatasetLoader::new(source)))
    }
}

/// Build the loader described by the configuration
pub fn loader_from_config(config: &TravelRecConfig) -> Result<Box<dyn DatasetLoader>> {
    loader_for_source(
        &config.dataset.source,
        Duration::from_secs(config.dataset.timeout_seconds.into()),
    )
}
