use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use keisei_core::model::Question;

use crate::error::LoaderError;

/// Dataset manifest: names the shard files holding question records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    pub shards: Vec<String>,
}

/// Asynchronous source of the question dataset.
///
/// The engine treats the dataset as opaque: loaded once per session,
/// immutable afterwards. A loader that rejects leaves the caller with a
/// [`LoaderError`] and nothing else: no retries, no partial data.
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    /// Load the full question dataset.
    ///
    /// # Errors
    ///
    /// Returns `LoaderError` when the dataset cannot be obtained or decoded.
    async fn load(&self) -> Result<Vec<Question>, LoaderError>;
}

//
// ─── HTTP LOADER ───────────────────────────────────────────────────────────────
//

/// Production loader: fetches `manifest.json` under a base URL, then the
/// first shard it names, a JSON array of question records.
#[derive(Debug, Clone)]
pub struct HttpDatasetLoader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDatasetLoader {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, LoaderError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "fetching dataset resource");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl DatasetLoader for HttpDatasetLoader {
    async fn load(&self) -> Result<Vec<Question>, LoaderError> {
        let manifest: Manifest = self.fetch_json("manifest.json").await?;
        let Some(shard) = manifest.shards.first() else {
            return Err(LoaderError::EmptyManifest);
        };
        let questions: Vec<Question> = self.fetch_json(shard).await?;
        if questions.is_empty() {
            return Err(LoaderError::EmptyDataset);
        }
        debug!(count = questions.len(), shard = %shard, "dataset loaded");
        Ok(questions)
    }
}

//
// ─── IN-MEMORY LOADER ──────────────────────────────────────────────────────────
//

/// Fixed in-memory dataset, for tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    questions: Vec<Question>,
}

impl InMemoryLoader {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse a shard-format JSON array into a loader.
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::Decode` when the payload is not a valid shard
    /// (including records with a missing or non-numeric evaluation).
    pub fn from_json(payload: &str) -> Result<Self, LoaderError> {
        let questions: Vec<Question> = serde_json::from_str(payload)?;
        Ok(Self { questions })
    }
}

#[async_trait]
impl DatasetLoader for InMemoryLoader {
    async fn load(&self) -> Result<Vec<Question>, LoaderError> {
        if self.questions.is_empty() {
            return Err(LoaderError::EmptyDataset);
        }
        Ok(self.questions.clone())
    }
}
