//! Flattened per-pokemon records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::{Pokemon, Species};
use crate::names::{capitalize, clean_flavor_text, clean_name};

/// Used when no flavor text exists in the requested language.
pub const NO_DESCRIPTION: &str = "No description available.";

/// One Pokedex record, flattened so that a language model can read it.
///
/// `search_content` is the text blob indexed for retrieval; its layout is
/// fixed and must not change without reindexing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PokedexEntry {
    pub name: String,
    pub id: u32,
    pub types: Vec<String>,
    pub color: String,
    pub shape: String,
    pub abilities: Vec<String>,
    /// Base stats keyed by API stat name, in API order.
    pub stats: IndexMap<String, u32>,
    pub moves: Vec<String>,
    pub variants: Vec<String>,
    pub description: String,
    pub evolution_info: String,
    pub search_content: String,
}

impl PokedexEntry {
    /// Flatten a pokemon and its species into an entry.
    ///
    /// `language` selects the flavor text (the first matching entry wins).
    pub fn build(
        pokemon: &Pokemon,
        species: &Species,
        evolution_info: impl Into<String>,
        language: &str,
    ) -> Self {
        let name = capitalize(&pokemon.name);
        let types: Vec<String> = pokemon.types.iter().map(|t| t.kind.name.clone()).collect();
        let abilities: Vec<String> =
            pokemon.abilities.iter().map(|a| a.ability.name.clone()).collect();
        let stats: IndexMap<String, u32> =
            pokemon.stats.iter().map(|s| (s.stat.name.clone(), s.base_stat)).collect();
        let color = resource_name(species.color.as_ref());
        let shape = resource_name(species.shape.as_ref());
        let variants: Vec<String> = species
            .varieties
            .iter()
            .skip(1)
            .map(|v| clean_name(Some(&v.pokemon.name)))
            .collect();
        let description = species
            .flavor_text(language)
            .map(clean_flavor_text)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        let evolution_info = evolution_info.into();

        let search_content = search_content(
            &name,
            &color,
            &shape,
            &types,
            &abilities,
            &stats,
            &variants,
            &description,
            &evolution_info,
        );

        Self {
            name,
            id: pokemon.id,
            types,
            color,
            shape,
            abilities,
            stats,
            moves: pokemon.moves.iter().map(|m| m.move_.name.clone()).collect(),
            variants,
            description,
            evolution_info,
            search_content,
        }
    }

    /// Base stat by API name (`hp`, `special-attack`, ...).
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.get(name).copied()
    }
}

fn resource_name(resource: Option<&crate::api::NamedResource>) -> String {
    match resource {
        Some(r) if !r.name.is_empty() => r.name.clone(),
        _ => "unknown".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn search_content(
    name: &str,
    color: &str,
    shape: &str,
    types: &[String],
    abilities: &[String],
    stats: &IndexMap<String, u32>,
    variants: &[String],
    description: &str,
    evolution_info: &str,
) -> String {
    let stats = stats
        .iter()
        .map(|(stat, value)| format!("{} {value}", capitalize(stat)))
        .collect::<Vec<_>>()
        .join(", ");
    let variants = if variants.is_empty() {
        "Variants: No Variants".to_string()
    } else {
        format!("Variants: {}", variants.join(", "))
    };
    format!(
        "Name: {name}. Color: {color}. Shape: {shape}. Types: {}. Abilities: {}. Stats: {stats}. \
         {variants}. Description: {description} Evolution: {evolution_info}",
        types.join("/"),
        abilities.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bulbasaur() -> (Pokemon, Species) {
        let pokemon: Pokemon = serde_json::from_value(json!({
            "id": 1,
            "name": "bulbasaur",
            "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
            "types": [
                {"slot": 1, "type": {"name": "grass"}},
                {"slot": 2, "type": {"name": "poison"}}
            ],
            "abilities": [
                {"ability": {"name": "overgrow"}, "is_hidden": false},
                {"ability": {"name": "chlorophyll"}, "is_hidden": true}
            ],
            "stats": [
                {"base_stat": 45, "stat": {"name": "hp"}},
                {"base_stat": 49, "stat": {"name": "attack"}},
                {"base_stat": 65, "stat": {"name": "special-attack"}}
            ],
            "moves": [{"move": {"name": "razor-wind"}}, {"move": {"name": "vine-whip"}}]
        }))
        .unwrap();
        let species: Species = serde_json::from_value(json!({
            "color": {"name": "green"},
            "shape": {"name": "quadruped"},
            "flavor_text_entries": [
                {"flavor_text": "A strange seed was\nplanted on its\u{c}back at birth.", "language": {"name": "en"}}
            ],
            "varieties": [{"is_default": true, "pokemon": {"name": "bulbasaur"}}]
        }))
        .unwrap();
        (pokemon, species)
    }

    #[test]
    fn builds_search_content() {
        let (pokemon, species) = bulbasaur();
        let entry = PokedexEntry::build(
            &pokemon,
            &species,
            "Bulbasaur evolves into Ivysaur via leveling up starting at level 16.",
            "en",
        );
        assert_eq!(entry.name, "Bulbasaur");
        assert_eq!(entry.types, ["grass", "poison"]);
        assert_eq!(entry.moves, ["razor-wind", "vine-whip"]);
        assert_eq!(entry.stat("special-attack"), Some(65));
        assert_eq!(
            entry.search_content,
            "Name: Bulbasaur. Color: green. Shape: quadruped. Types: grass/poison. \
             Abilities: overgrow, chlorophyll. Stats: Hp 45, Attack 49, Special-attack 65. \
             Variants: No Variants. Description: A strange seed was planted on its back at birth. \
             Evolution: Bulbasaur evolves into Ivysaur via leveling up starting at level 16."
        );
    }

    #[test]
    fn lists_non_default_varieties() {
        let (pokemon, mut species) = bulbasaur();
        species.varieties.push(serde_json::from_value(json!({"pokemon": {"name": "venusaur-mega"}})).unwrap());
        species.varieties.push(serde_json::from_value(json!({"pokemon": {"name": "venusaur-gmax"}})).unwrap());
        let entry = PokedexEntry::build(&pokemon, &species, "Unknown", "en");
        assert_eq!(entry.variants, ["venusaur mega", "venusaur gmax"]);
        assert!(entry.search_content.contains(" Variants: venusaur mega, venusaur gmax. Description:"));
    }

    #[test]
    fn falls_back_when_species_is_sparse() {
        let (pokemon, _) = bulbasaur();
        let entry = PokedexEntry::build(&pokemon, &Species::default(), "Unknown", "en");
        assert_eq!(entry.description, NO_DESCRIPTION);
        assert_eq!(entry.shape, "unknown");
        assert!(entry.search_content.ends_with("Description: No description available. Evolution: Unknown"));
    }
}
