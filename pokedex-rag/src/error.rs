//! Error types for the `pokedex-rag` crate.

use thiserror::Error;

/// Errors that can occur while building or querying the Pokedex.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// The data source failed to return a document for a URL.
    #[error("Source error ({url}): {message}")]
    Source {
        /// The URL that was requested.
        url: String,
        /// A description of the failure.
        message: String,
    },

    /// A fetched document did not match the expected shape.
    #[error("Decode error ({context}): {source}")]
    Decode {
        /// What was being decoded, usually a URL.
        context: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A tool call failed.
    #[error("Tool error: {0}")]
    Tool(String),
}

impl PokedexError {
    /// Build a [`PokedexError::Source`] for the given URL.
    pub fn source(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source { url: url.into(), message: message.into() }
    }

    /// Build a [`PokedexError::Decode`] with a context label.
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode { context: context.into(), source }
    }
}

/// A convenience result type for Pokedex operations.
pub type Result<T> = std::result::Result<T, PokedexError>;
