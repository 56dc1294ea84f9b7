// remote.rs
// The upstream PokéAPI boundary. Everything above this module talks to
// a RemoteSource; the reqwest-backed client lives here together with
// its Pokémon cache.

use async_trait::async_trait;

use crate::cache::InmemoryCache;
use crate::config::Config;
use crate::error::ApiError;
use crate::mapper;
use crate::pokeapi::{AbilityData, CategoryData, NamedAPIResource, PokemonData, ResourceList, SpeciesData};
use crate::pokemon::{AbilityDetails, Pokemon};

// The ability index is small enough to pull in one request.
const ABILITY_LIMIT: u32 = 400;

/// One page of a paginated resource listing.
#[derive(Debug, Clone, Default)]
pub struct ResourcePage {
    pub items: Vec<NamedAPIResource>,
    pub has_next: bool,
}

/// Read access to the remote Pokédex. The trait is the substitution
/// point for tests; production code uses [`PokeApiClient`].
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetches a single Pokémon by name, numeric id, or full resource
    /// URL, mapped into the domain model.
    async fn fetch_by_name_or_id(&self, token: &str) -> Result<Pokemon, ApiError>;

    /// Fetches one page of the `/pokemon` listing.
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ResourcePage, ApiError>;

    /// Fetches a category resource such as `/type/fire` or
    /// `/region/kanto`.
    async fn fetch_category(&self, kind: &str, value: &str) -> Result<CategoryData, ApiError>;

    /// Fetches the full ability index as name/url references.
    async fn fetch_all_ability_refs(&self) -> Result<Vec<NamedAPIResource>, ApiError>;

    /// Fetches one ability by name or full resource URL.
    async fn fetch_ability_details(&self, token: &str) -> Result<AbilityDetails, ApiError>;

    /// Fetches an arbitrary resource URL as raw JSON. Used for the
    /// species and evolution-chain documents reached by URL hopping.
    async fn fetch_raw(&self, url: &str) -> Result<serde_json::Value, ApiError>;

    async fn fetch_by_id(&self, id: u32) -> Result<Pokemon, ApiError> {
        self.fetch_by_name_or_id(&id.to_string()).await
    }
}

/// HTTP client for the PokéAPI with an in-memory Pokémon cache.
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: InmemoryCache<Pokemon>,
    cache_enabled: bool,
}

impl PokeApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            cache: InmemoryCache::new(config.cache.clone()),
            cache_enabled: config.api.cache_enabled,
        }
    }

    // Every remote call funnels through here so request logging and
    // error classification stay uniform.
    async fn get_json<T>(&self, url: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!("Requesting {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to make HTTP request to {}: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("Remote returned 404 for {}", url);
            return Err(ApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let error_msg = format!("API request to {} failed with status: {}", url, status);
            tracing::error!("{}", error_msg);
            return Err(ApiError::RemoteUnavailable(error_msg));
        }

        let value = response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            ApiError::MappingDefect(format!("JSON parsing failed: {}", e))
        })?;

        tracing::debug!("Request to {} succeeded", url);
        Ok(value)
    }

    // A token is either a bare name/id or a full resource URL handed
    // back by a listing or species document.
    fn pokemon_target(&self, token: &str) -> (String, String) {
        let token = token.trim();
        if token.starts_with("http") {
            (token.to_string(), token.to_string())
        } else {
            let slug = token.to_lowercase();
            let url = format!("{}/pokemon/{}", self.base_url, slug);
            (slug, url)
        }
    }
}

#[async_trait]
impl RemoteSource for PokeApiClient {
    async fn fetch_by_name_or_id(&self, token: &str) -> Result<Pokemon, ApiError> {
        let (key, url) = self.pokemon_target(token);
        if key.is_empty() {
            return Err(ApiError::NotFound("empty Pokémon token".to_string()));
        }

        if self.cache_enabled {
            if let Some(pokemon) = self.cache.get(&key) {
                return Ok(pokemon);
            }
        }

        let data: PokemonData = self.get_json(&url).await?;

        // The species document carries generation, habitat and flavor
        // text. Losing it degrades the result but must not sink it.
        let species: Option<SpeciesData> = match &data.species {
            Some(species_ref) => match self.get_json(&species_ref.url).await {
                Ok(species) => Some(species),
                Err(e) => {
                    tracing::warn!("Species lookup failed for {}: {}", data.name, e);
                    None
                }
            },
            None => None,
        };

        let pokemon = mapper::map_pokemon(&data, species.as_ref()).ok_or_else(|| {
            ApiError::MappingDefect(format!("Pokémon payload from {} has no id", url))
        })?;

        if self.cache_enabled {
            if let Err(e) = self.cache.insert(key, pokemon.clone()) {
                tracing::warn!("Failed to cache Pokémon {}: {}", pokemon.name, e);
            }
        }

        Ok(pokemon)
    }

    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ResourcePage, ApiError> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset);
        let list: ResourceList = self.get_json(&url).await?;
        Ok(ResourcePage {
            items: list.results,
            has_next: list.next.is_some(),
        })
    }

    async fn fetch_category(&self, kind: &str, value: &str) -> Result<CategoryData, ApiError> {
        let url = format!("{}/{}/{}", self.base_url, kind, value.trim().to_lowercase());
        self.get_json(&url).await
    }

    async fn fetch_all_ability_refs(&self) -> Result<Vec<NamedAPIResource>, ApiError> {
        let url = format!("{}/ability?limit={}", self.base_url, ABILITY_LIMIT);
        let list: ResourceList = self.get_json(&url).await?;
        Ok(list.results)
    }

    async fn fetch_ability_details(&self, token: &str) -> Result<AbilityDetails, ApiError> {
        let token = token.trim();
        let url = if token.starts_with("http") {
            token.to_string()
        } else {
            format!("{}/ability/{}", self.base_url, token.to_lowercase())
        };

        let data: AbilityData = self.get_json(&url).await?;
        mapper::map_ability(&data, &url).ok_or_else(|| {
            ApiError::MappingDefect(format!("ability payload from {} has no id", url))
        })
    }

    async fn fetch_raw(&self, url: &str) -> Result<serde_json::Value, ApiError> {
        self.get_json(url).await
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::pokemon::Sprites;

    /// Canned remote source for coordinator and state tests. Every
    /// call is recorded so tests can assert on traffic.
    #[derive(Default)]
    pub struct StubSource {
        pub pokemon: HashMap<String, Pokemon>,
        pub roster: Vec<NamedAPIResource>,
        pub categories: HashMap<(String, String), CategoryData>,
        pub ability_refs: Vec<NamedAPIResource>,
        pub abilities: HashMap<String, AbilityDetails>,
        pub raw: HashMap<String, serde_json::Value>,
        pub calls: Mutex<Vec<String>>,
        pub list_delay: Duration,
        pub ability_delay: Duration,
        pub fail_lists: bool,
        /// Backs each page start up by this many entries, modelling an
        /// upstream index that shifted between page fetches.
        pub list_overlap: u32,
    }

    pub fn mon(id: u32, name: &str, types: &[&str]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: types.iter().map(|s| s.to_string()).collect(),
            abilities: Vec::new(),
            stats: Vec::new(),
            height: Some(1.0),
            weight: Some(10.0),
            sprites: Sprites::default(),
            species: None,
            species_url: None,
            generation: None,
            habitat: "unknown".to_string(),
            description: String::new(),
            evolution_chain: Vec::new(),
        }
    }

    pub fn reference(name: &str, url: &str) -> NamedAPIResource {
        NamedAPIResource {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    pub fn pokemon_url(id: u32) -> String {
        format!("https://pokeapi.co/api/v2/pokemon/{}/", id)
    }

    pub fn species_url(id: u32) -> String {
        format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id)
    }

    impl StubSource {
        // Registers a Pokémon under its id, name and canonical URL so
        // any token form resolves.
        pub fn add_pokemon(&mut self, pokemon: Pokemon) {
            self.pokemon.insert(pokemon.id.to_string(), pokemon.clone());
            self.pokemon.insert(pokemon.name.clone(), pokemon.clone());
            self.pokemon.insert(pokemon_url(pokemon.id), pokemon);
        }

        pub fn add_roster_entry(&mut self, id: u32, name: &str) {
            self.roster.push(reference(name, &pokemon_url(id)));
        }

        pub fn add_category(&mut self, kind: &str, value: &str, data: CategoryData) {
            self.categories
                .insert((kind.to_string(), value.to_string()), data);
        }

        fn record(&self, call: String) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }

        pub fn recorded_calls(&self) -> Vec<String> {
            self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl RemoteSource for StubSource {
        async fn fetch_by_name_or_id(&self, token: &str) -> Result<Pokemon, ApiError> {
            self.record(format!("pokemon:{}", token));
            self.pokemon
                .get(token)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(token.to_string()))
        }

        async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ResourcePage, ApiError> {
            self.record(format!("list:{}:{}", limit, offset));
            if !self.list_delay.is_zero() {
                tokio::time::sleep(self.list_delay).await;
            }
            if self.fail_lists {
                return Err(ApiError::RemoteUnavailable("listing disabled".to_string()));
            }
            let offset = offset.saturating_sub(self.list_overlap);
            let start = (offset as usize).min(self.roster.len());
            let end = (start + limit as usize).min(self.roster.len());
            Ok(ResourcePage {
                items: self.roster[start..end].to_vec(),
                has_next: end < self.roster.len(),
            })
        }

        async fn fetch_category(&self, kind: &str, value: &str) -> Result<CategoryData, ApiError> {
            self.record(format!("category:{}:{}", kind, value));
            self.categories
                .get(&(kind.to_string(), value.to_string()))
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("{}/{}", kind, value)))
        }

        async fn fetch_all_ability_refs(&self) -> Result<Vec<NamedAPIResource>, ApiError> {
            self.record("ability-refs".to_string());
            if !self.ability_delay.is_zero() {
                tokio::time::sleep(self.ability_delay).await;
            }
            Ok(self.ability_refs.clone())
        }

        async fn fetch_ability_details(&self, token: &str) -> Result<AbilityDetails, ApiError> {
            self.record(format!("ability:{}", token));
            self.abilities
                .get(token)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(token.to_string()))
        }

        async fn fetch_raw(&self, url: &str) -> Result<serde_json::Value, ApiError> {
            self.record(format!("raw:{}", url));
            self.raw
                .get(url)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(url.to_string()))
        }
    }
}
