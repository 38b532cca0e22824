//! Pokedex download orchestrator.
//!
//! The [`PokedexDownloader`] walks the pokemon listing sequentially and, for
//! each pokemon, fetches its record, its species and its evolution chain
//! before flattening them into a [`PokedexEntry`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pokedex_rag::{DownloadConfig, PokedexDownloader};
//!
//! let config = DownloadConfig::builder().limit(151).build()?;
//! let downloader = PokedexDownloader::new(config, Arc::new(my_http_source));
//! let pokedex = downloader.download().await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::api::{EvolutionChainResponse, Pokemon, ResourceList, Species};
use crate::config::DownloadConfig;
use crate::entry::PokedexEntry;
use crate::error::Result;
use crate::evolution::{EvolutionChain, UNKNOWN_EVOLUTION};
use crate::pokedex::Pokedex;
use crate::source::{PokeApiSource, fetch_as};

/// Sequential downloader over an injected [`PokeApiSource`].
pub struct PokedexDownloader {
    config: DownloadConfig,
    source: Arc<dyn PokeApiSource>,
    /// Rendered evolution text keyed by chain URL.
    chain_cache: Mutex<HashMap<String, String>>,
}

impl PokedexDownloader {
    pub fn new(config: DownloadConfig, source: Arc<dyn PokeApiSource>) -> Self {
        Self { config, source, chain_cache: Mutex::new(HashMap::new()) }
    }

    /// Return a reference to the download configuration.
    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Download every listed pokemon.
    ///
    /// Pokemon whose record or species cannot be fetched are skipped with a
    /// warning. The configured delay is awaited before every pokemon except
    /// the first, including after a skipped one, so the request rate stays
    /// fixed however many entries fail.
    ///
    /// # Errors
    ///
    /// Fails only if the listing itself cannot be fetched or decoded.
    pub async fn download(&self) -> Result<Pokedex> {
        let list_url = self.config.list_url();
        let listing: ResourceList = fetch_as(self.source.as_ref(), &list_url).await?;
        let total = listing.results.len();
        info!(url = %list_url, total, "starting pokedex download");

        let delay = self.config.request_delay();
        let mut entries = Vec::with_capacity(total);
        for (index, resource) in listing.results.iter().enumerate() {
            if index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            info!(position = index + 1, total, name = %resource.name, "fetching pokemon");

            match self.fetch_entry(&resource.url).await {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(name = %resource.name, error = %e, "skipping pokemon"),
            }
        }

        info!(count = entries.len(), total, "pokedex download complete");
        Ok(Pokedex::new(entries))
    }

    /// Fetch and flatten a single pokemon given its `/pokemon/{id}` URL.
    ///
    /// # Errors
    ///
    /// Returns the source or decode error of the pokemon or species
    /// document. Evolution chain failures never fail the entry.
    pub async fn fetch_entry(&self, pokemon_url: &str) -> Result<PokedexEntry> {
        let pokemon: Pokemon = fetch_as(self.source.as_ref(), pokemon_url).await?;
        let species: Species = fetch_as(self.source.as_ref(), &pokemon.species.url).await?;

        let evolution_info = match species.evolution_chain.as_ref() {
            Some(chain) if !chain.url.is_empty() => self.fetch_evolution_text(&chain.url).await,
            _ => {
                warn!(name = %pokemon.name, "species has no evolution chain");
                UNKNOWN_EVOLUTION.to_string()
            }
        };

        Ok(PokedexEntry::build(&pokemon, &species, evolution_info, &self.config.language))
    }

    /// Render the evolution chain at `chain_url`.
    ///
    /// Returns [`UNKNOWN_EVOLUTION`] if the chain cannot be fetched or
    /// decoded. Successful renders are cached when enabled.
    pub async fn fetch_evolution_text(&self, chain_url: &str) -> String {
        if self.config.cache_evolution_chains {
            if let Some(text) = self.chain_cache.lock().await.get(chain_url) {
                debug!(url = chain_url, "evolution chain cache hit");
                return text.clone();
            }
        }

        let response: EvolutionChainResponse =
            match fetch_as(self.source.as_ref(), chain_url).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(url = chain_url, error = %e, "evolution chain unavailable");
                    return UNKNOWN_EVOLUTION.to_string();
                }
            };

        let text = EvolutionChain::from_response(&response).text();
        if self.config.cache_evolution_chains {
            self.chain_cache.lock().await.insert(chain_url.to_string(), text.clone());
        }
        text
    }
}
