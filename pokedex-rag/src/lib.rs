//! # pokedex-rag
//!
//! Building blocks for a Pokemon question-answering agent:
//!
//! - [`PokedexDownloader`] walks PokeAPI through an injected [`PokeApiSource`]
//!   and flattens every pokemon into a [`PokedexEntry`]
//! - [`EvolutionChain`] renders an evolution tree into English sentences
//! - [`Document`] turns an entry into a text blob plus filterable metadata
//!   for a vector index
//! - [`MoveLookupTool`] answers move-learning questions from the raw data
//!
//! HTTP transport, embedding, vector search and the agent loop live outside
//! this crate.

pub mod api;
pub mod config;
pub mod document;
pub mod download;
pub mod entry;
pub mod error;
pub mod evolution;
pub mod names;
pub mod pokedex;
pub mod source;
pub mod tool;

pub use config::{DownloadConfig, DownloadConfigBuilder};
pub use document::{Document, MetadataValue};
pub use download::PokedexDownloader;
pub use entry::PokedexEntry;
pub use error::{PokedexError, Result};
pub use evolution::{
    EvolutionChain, EvolutionDetail, EvolutionNode, EvolutionTrigger, GenderRequirement,
    NO_EVOLUTION, PhysicalStatsRelation, UNKNOWN_EVOLUTION, describe_detail, describe_evolution,
};
pub use pokedex::Pokedex;
pub use source::{InMemorySource, PokeApiSource, fetch_as};
pub use tool::{MoveLookupTool, Tool};
