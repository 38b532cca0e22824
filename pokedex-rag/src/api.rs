//! Wire types for the PokeAPI v2 documents this crate consumes.
//!
//! Only the fields the Pokedex uses are modelled. A missing key falls back
//! to its default; `null` is accepted only where the field is an `Option`.
//! An evolution chain document must carry `chain` and every link must carry
//! `species`, otherwise decoding fails.

use serde::{Deserialize, Serialize};

/// A `{ "name", "url" }` reference to another resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A page of `/pokemon?limit=&offset=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceList {
    pub count: Option<u64>,
    pub results: Vec<NamedResource>,
}

/// `/pokemon/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub species: NamedResource,
    pub types: Vec<PokemonType>,
    pub abilities: Vec<PokemonAbility>,
    pub stats: Vec<PokemonStat>,
    pub moves: Vec<PokemonMove>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

/// `/pokemon-species/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Species {
    pub name: String,
    pub color: Option<NamedResource>,
    pub shape: Option<NamedResource>,
    pub flavor_text_entries: Vec<FlavorText>,
    pub evolution_chain: Option<NamedResource>,
    pub varieties: Vec<Variety>,
}

impl Species {
    /// First flavor text in `language`, if any.
    pub fn flavor_text(&self, language: &str) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.flavor_text.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Variety {
    pub is_default: bool,
    pub pokemon: NamedResource,
}

/// `/evolution-chain/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChainResponse {
    #[serde(default)]
    pub id: Option<u32>,
    pub chain: ChainLink,
}

/// One node of the evolution tree. `evolution_details` describe how the
/// parent evolves into this species.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<RawEvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// The loosely typed condition object of an evolution edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEvolutionDetail {
    pub trigger: Option<NamedResource>,
    pub item: Option<NamedResource>,
    pub trade_species: Option<NamedResource>,
    pub min_level: Option<i64>,
    pub time_of_day: Option<String>,
    pub held_item: Option<NamedResource>,
    pub min_happiness: Option<i64>,
    pub min_affection: Option<i64>,
    pub min_beauty: Option<i64>,
    pub location: Option<NamedResource>,
    pub known_move: Option<NamedResource>,
    pub known_move_type: Option<NamedResource>,
    pub gender: Option<i64>,
    pub needs_overworld_rain: Option<bool>,
    pub turn_upside_down: Option<bool>,
    pub party_species: Option<NamedResource>,
    pub party_type: Option<NamedResource>,
    pub relative_physical_stats: Option<i64>,
}
