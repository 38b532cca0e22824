//! The in-memory Pokedex: entries keyed by lower-case name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::entry::PokedexEntry;
use crate::names::normalize_move;

/// A collection of [`PokedexEntry`] values with case-insensitive lookup.
///
/// Serializes as a plain JSON array of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<PokedexEntry>", into = "Vec<PokedexEntry>")]
pub struct Pokedex {
    entries: Vec<PokedexEntry>,
    by_name: HashMap<String, usize>,
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Pokedex {
    pub fn new(entries: Vec<PokedexEntry>) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (lookup_key(&entry.name), index))
            .collect();
        Self { entries, by_name }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PokedexEntry] {
        &self.entries
    }

    /// Look up an entry by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&PokedexEntry> {
        self.by_name.get(&lookup_key(name)).map(|&index| &self.entries[index])
    }

    /// Whether `pokemon` can learn `move_name`; `None` if the pokemon is unknown.
    ///
    /// Move names compare case-insensitively with hyphens and spaces treated
    /// alike, so `"Solar Beam"` matches a stored `solar-beam`.
    pub fn can_learn(&self, pokemon: &str, move_name: &str) -> Option<bool> {
        let entry = self.get(pokemon)?;
        let wanted = normalize_move(move_name);
        Some(entry.moves.iter().any(|known| normalize_move(known) == wanted))
    }

    /// Rewrite every stored move name with hyphens replaced by spaces.
    ///
    /// Returns the number of moves processed.
    pub fn clean_move_names(&mut self) -> usize {
        let mut processed = 0;
        for entry in &mut self.entries {
            for known in &mut entry.moves {
                *known = known.replace('-', " ");
            }
            processed += entry.moves.len();
        }
        processed
    }

    /// Index documents for every entry, in Pokedex order.
    pub fn documents(&self) -> Vec<Document> {
        self.entries.iter().map(Document::from_entry).collect()
    }
}

impl From<Vec<PokedexEntry>> for Pokedex {
    fn from(entries: Vec<PokedexEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<Pokedex> for Vec<PokedexEntry> {
    fn from(pokedex: Pokedex) -> Self {
        pokedex.entries
    }
}
