// pokeapi.rs
// Wire-format payloads for the PokeAPI endpoints this crate consumes.
// Unknown upstream fields are ignored; optional fields default so a
// sparse payload never fails to decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NamedAPIResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonData {
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    pub species: Option<NamedAPIResource>,
    #[serde(default)]
    pub sprites: SpriteData,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: i32,
    pub r#type: Option<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonAbility {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: i32,
    pub ability: Option<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonStat {
    #[serde(default)]
    pub base_stat: i32,
    #[serde(default)]
    pub effort: i32,
    pub stat: Option<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SpriteData {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprite,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ArtworkSprite {
    pub front_default: Option<String>,
}

/// `/pokemon-species/{id}`, trimmed to the fields the mapper and the
/// detail view need.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SpeciesData {
    pub generation: Option<NamedAPIResource>,
    pub habitat: Option<NamedAPIResource>,
    pub evolution_chain: Option<UrlResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UrlResource {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FlavorTextEntry {
    #[serde(default)]
    pub flavor_text: String,
    pub language: Option<NamedAPIResource>,
}

/// Paginated `{count, next, previous, results}` envelope returned by the
/// roster and ability list endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ResourceList {
    #[serde(default)]
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedAPIResource>,
}

/// `/{category}/{value}` payloads. One struct covers the variants this
/// crate routes through: `type` and `ability` list `pokemon` slots,
/// `generation` and `pokemon-habitat` list `pokemon_species`, `region`
/// carries a `main_generation` pointer.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CategoryData {
    #[serde(default)]
    pub pokemon: Vec<CategoryPokemonSlot>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedAPIResource>,
    pub main_generation: Option<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CategoryPokemonSlot {
    pub pokemon: Option<NamedAPIResource>,
    #[serde(default)]
    pub slot: i32,
}

/// `/generation/{id}`, resolved behind a region's `main_generation`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GenerationData {
    #[serde(default)]
    pub pokemon_species: Vec<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EvolutionChainData {
    pub chain: Option<ChainLink>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChainLink {
    #[serde(default)]
    pub species: NamedAPIResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AbilityData {
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LocalizedName {
    #[serde(default)]
    pub name: String,
    pub language: Option<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    pub short_effect: Option<String>,
    pub language: Option<NamedAPIResource>,
}
