//! Index documents: the text an embedding model reads plus the metadata a
//! retriever filters on.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entry::PokedexEntry;

/// Value used for `type` and `ability` when the entry has none.
const UNKNOWN_METADATA: &str = "Unknown";

/// A metadata value. Stats stay numeric so range filters work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MetadataValue {
    Integer(i64),
    Text(String),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Integer(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// Stat metadata keys paired with the API stat they come from.
const STAT_FIELDS: [(&str, &str); 6] = [
    ("hp", "hp"),
    ("attack", "attack"),
    ("defense", "defense"),
    ("speed", "speed"),
    ("special_attack", "special-attack"),
    ("special_defense", "special-defense"),
];

/// A source document containing text content and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document (the Pokedex number).
    pub id: String,
    /// The text content of the document.
    pub text: String,
    /// Key-value metadata associated with the document.
    pub metadata: HashMap<String, MetadataValue>,
}

impl Document {
    /// Build the index document for an entry.
    ///
    /// Only the primary type and primary ability are kept as metadata; the
    /// text blob carries the full lists. Missing stats are left out rather
    /// than defaulted.
    pub fn from_entry(entry: &PokedexEntry) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert("name".to_string(), MetadataValue::from(entry.name.as_str()));
        metadata.insert("id".to_string(), MetadataValue::from(entry.id));
        metadata.insert(
            "type".to_string(),
            MetadataValue::from(entry.types.first().map_or(UNKNOWN_METADATA, String::as_str)),
        );
        metadata.insert("color".to_string(), MetadataValue::from(entry.color.as_str()));
        metadata.insert("shape".to_string(), MetadataValue::from(entry.shape.as_str()));
        metadata.insert(
            "ability".to_string(),
            MetadataValue::from(entry.abilities.first().map_or(UNKNOWN_METADATA, String::as_str)),
        );
        for (key, stat) in STAT_FIELDS {
            if let Some(value) = entry.stat(stat) {
                metadata.insert(key.to_string(), MetadataValue::from(value));
            }
        }

        Self { id: entry.id.to_string(), text: entry.search_content.clone(), metadata }
    }
}

impl From<&PokedexEntry> for Document {
    fn from(entry: &PokedexEntry) -> Self {
        Self::from_entry(entry)
    }
}
