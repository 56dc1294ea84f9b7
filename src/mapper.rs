// mapper.rs
// Normalizes raw PokeAPI payloads into domain entities. Total over
// sparse payloads: every optional field has a default, and only a
// missing id rejects the entity.

use crate::pokeapi::{AbilityData, PokemonData, SpeciesData};
use crate::pokemon::{AbilityDetails, Pokemon, Sprites, Stat};

pub const NO_DESCRIPTION: &str = "No description available.";

/// Maps a `/pokemon/{id}` payload (plus its species payload, when the
/// fetch for it succeeded) into a [`Pokemon`]. Returns `None` when the
/// payload carries no id.
pub fn map_pokemon(data: &PokemonData, species: Option<&SpeciesData>) -> Option<Pokemon> {
    let id = data.id?;

    let generation = species
        .and_then(|s| s.generation.as_ref())
        .and_then(|g| trailing_segment(&g.url))
        .map(|seg| format!("generation-{}", seg));

    let habitat = species
        .and_then(|s| s.habitat.as_ref())
        .map(|h| h.name.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let description = species
        .and_then(|s| {
            s.flavor_text_entries
                .iter()
                .find(|e| e.language.as_ref().is_some_and(|l| l.name == "en"))
        })
        .map(|e| clean_flavor_text(&e.flavor_text))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Some(Pokemon {
        id,
        name: data.name.clone(),
        types: data
            .types
            .iter()
            .filter_map(|t| t.r#type.as_ref())
            .map(|r| r.name.clone())
            .collect(),
        abilities: data
            .abilities
            .iter()
            .filter_map(|a| a.ability.as_ref())
            .map(|r| r.name.clone())
            .collect(),
        stats: data
            .stats
            .iter()
            .map(|s| Stat {
                name: s.stat.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
                value: s.base_stat,
            })
            .collect(),
        height: scale_tenths(data.height),
        weight: scale_tenths(data.weight),
        sprites: Sprites {
            front_default: data.sprites.front_default.clone(),
            back_default: data.sprites.back_default.clone(),
            front_shiny: data.sprites.front_shiny.clone(),
            back_shiny: data.sprites.back_shiny.clone(),
            official_artwork: data.sprites.other.official_artwork.front_default.clone(),
        },
        species: data.species.as_ref().map(|s| s.name.clone()),
        species_url: data.species.as_ref().map(|s| s.url.clone()),
        generation,
        habitat,
        description,
        // Filled by the detail resolution path; list results leave it
        // empty.
        evolution_chain: Vec::new(),
    })
}

/// Maps an `/ability/{id}` payload. English entries are preferred for
/// both the display name and the description.
pub fn map_ability(data: &AbilityData, url: &str) -> Option<AbilityDetails> {
    let id = data.id?;

    let localized_name = data
        .names
        .iter()
        .find(|n| n.language.as_ref().is_some_and(|l| l.name == "en"))
        .map(|n| n.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| data.name.clone());

    let entry = data
        .effect_entries
        .iter()
        .find(|e| e.language.as_ref().is_some_and(|l| l.name == "en"))
        .or_else(|| data.effect_entries.first());

    let description = entry
        .and_then(|e| {
            e.short_effect
                .clone()
                .filter(|s| !s.is_empty())
                .or_else(|| Some(e.effect.clone()).filter(|s| !s.is_empty()))
        })
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Some(AbilityDetails {
        id,
        name: data.name.clone(),
        localized_name,
        description,
        url: url.to_string(),
    })
}

/// Provider decimeters/hectograms → meters/kilograms. Zero means the
/// provider has no measurement, so it maps to `None`.
fn scale_tenths(raw: Option<i32>) -> Option<f64> {
    raw.filter(|v| *v != 0).map(|v| f64::from(v) / 10.0)
}

/// Last non-empty path segment of a resource URL
/// (`…/generation/3/` → `"3"`).
pub fn trailing_segment(url: &str) -> Option<&str> {
    url.split('/').filter(|s| !s.is_empty()).next_back()
}

/// Numeric trailing segment, for species/pokemon resource URLs.
pub fn trailing_id(url: &str) -> Option<u32> {
    trailing_segment(url).and_then(|s| s.parse().ok())
}

/// Flavor texts arrive with embedded newlines and form feeds; collapse
/// all whitespace runs to single spaces.
pub fn clean_flavor_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
