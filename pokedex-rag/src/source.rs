//! Data source trait for fetching PokeAPI documents.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{PokedexError, Result};

/// A backend that resolves a PokeAPI URL to its JSON document.
///
/// Transport, retries and timeouts are the implementation's concern. The
/// downloader only sees a document or an error.
///
/// # Example
///
/// ```rust,ignore
/// use pokedex_rag::{InMemorySource, PokeApiSource};
///
/// let source = InMemorySource::new();
/// source.insert("https://pokeapi.co/api/v2/pokemon/1/", json!({"id": 1})).await;
/// let doc = source.fetch("https://pokeapi.co/api/v2/pokemon/1/").await?;
/// ```
#[async_trait]
pub trait PokeApiSource: Send + Sync {
    /// Fetch the JSON document at `url`.
    async fn fetch(&self, url: &str) -> Result<Value>;
}

/// Fetch `url` and decode it into `T`.
///
/// # Errors
///
/// Propagates the source error, or returns [`PokedexError::Decode`] naming
/// the URL if the document has the wrong shape.
pub async fn fetch_as<T: DeserializeOwned>(source: &dyn PokeApiSource, url: &str) -> Result<T> {
    let value = source.fetch(url).await?;
    serde_json::from_value(value).map_err(|e| PokedexError::decode(url, e))
}

/// A source serving documents from memory, keyed by exact URL.
///
/// Suitable for tests and for replaying a previously captured API dump.
#[derive(Debug, Default)]
pub struct InMemorySource {
    documents: RwLock<HashMap<String, Value>>,
}

impl InMemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` for `url`, replacing any previous document.
    pub async fn insert(&self, url: impl Into<String>, document: Value) {
        self.documents.write().await.insert(url.into(), document);
    }

    /// Stop serving `url`.
    pub async fn remove(&self, url: &str) {
        self.documents.write().await.remove(url);
    }
}

impl FromIterator<(String, Value)> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { documents: RwLock::new(iter.into_iter().collect()) }
    }
}

#[async_trait]
impl PokeApiSource for InMemorySource {
    async fn fetch(&self, url: &str) -> Result<Value> {
        self.documents
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| PokedexError::source(url, "404 Not Found"))
    }
}
