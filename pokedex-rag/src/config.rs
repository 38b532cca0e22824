//! Configuration for the Pokedex download.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PokedexError, Result};

/// Default PokeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Configuration parameters for [`PokedexDownloader`](crate::PokedexDownloader).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DownloadConfig {
    /// Root of the REST API, without a trailing slash.
    pub base_url: String,
    /// Maximum number of pokemon to list.
    pub limit: usize,
    /// Number of pokemon to skip (151 starts at generation 2).
    pub offset: usize,
    /// Pause between consecutive pokemon, in milliseconds.
    pub request_delay_ms: u64,
    /// Language code used to pick the flavor text.
    pub language: String,
    /// Render each evolution chain once and reuse it for every member species.
    pub cache_evolution_chains: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: 1025,
            offset: 0,
            request_delay_ms: 100,
            language: "en".to_string(),
            cache_evolution_chains: true,
        }
    }
}

impl DownloadConfig {
    /// Create a new builder for constructing a [`DownloadConfig`].
    pub fn builder() -> DownloadConfigBuilder {
        DownloadConfigBuilder::default()
    }

    /// The pause between consecutive pokemon.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// URL of the paginated pokemon listing.
    pub fn list_url(&self) -> String {
        format!("{}/pokemon?limit={}&offset={}", self.base_url, self.limit, self.offset)
    }
}

/// Builder for constructing a validated [`DownloadConfig`].
#[derive(Debug, Clone, Default)]
pub struct DownloadConfigBuilder {
    config: DownloadConfig,
}

impl DownloadConfigBuilder {
    /// Set the API root. A trailing slash is stripped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the number of pokemon to list.
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    /// Set the number of pokemon to skip.
    pub fn offset(mut self, offset: usize) -> Self {
        self.config.offset = offset;
        self
    }

    /// Set the pause between consecutive pokemon. Saturates at `u64::MAX` ms.
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.config.request_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the flavor text language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Enable or disable the per-chain evolution text cache.
    pub fn cache_evolution_chains(mut self, enabled: bool) -> Self {
        self.config.cache_evolution_chains = enabled;
        self
    }

    /// Build the [`DownloadConfig`], validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Config`] if:
    /// - `limit == 0`
    /// - `base_url` is empty
    /// - `language` is empty
    pub fn build(self) -> Result<DownloadConfig> {
        if self.config.limit == 0 {
            return Err(PokedexError::Config("limit must be greater than zero".to_string()));
        }
        if self.config.base_url.trim().is_empty() {
            return Err(PokedexError::Config("base_url must not be empty".to_string()));
        }
        if self.config.language.trim().is_empty() {
            return Err(PokedexError::Config("language must not be empty".to_string()));
        }
        Ok(self.config)
    }
}
