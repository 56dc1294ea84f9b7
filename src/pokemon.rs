// pokemon.rs
// Mapped domain entities handed to consumers. Wire payloads live in
// `pokeapi`; the mapper turns those into these.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Provider slot order; the first entry is the display "main type".
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    /// Provider order preserved (hp, attack, defense, special-attack,
    /// special-defense, speed upstream).
    pub stats: Vec<Stat>,
    /// Meters. `None` when the provider reports nothing (or zero).
    pub height: Option<f64>,
    /// Kilograms. Same rule as `height`.
    pub weight: Option<f64>,
    pub sprites: Sprites,
    pub species: Option<String>,
    pub species_url: Option<String>,
    /// `"generation-{n}"`, from the species payload.
    pub generation: Option<String>,
    pub habitat: String,
    pub description: String,
    pub evolution_chain: Vec<EvolutionStage>,
}

impl Pokemon {
    /// Sum of base stats, used for display-side strength comparisons.
    pub fn stat_total(&self) -> i32 {
        self.stats.iter().map(|s| s.value).sum()
    }

    pub fn main_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Display image: official artwork when present, front sprite
    /// otherwise.
    pub fn image(&self) -> Option<&str> {
        self.sprites
            .official_artwork
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stat {
    pub name: String,
    pub value: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    pub official_artwork: Option<String>,
}

/// One node of a resolved evolution line, in pre-order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvolutionStage {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
}

/// Resolved ability roster entry (the state's ability cache).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AbilityDetails {
    pub id: u32,
    pub name: String,
    pub localized_name: String,
    pub description: String,
    pub url: String,
}
