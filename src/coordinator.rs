// coordinator.rs
// Turns search criteria into hydrated result pages. Routing order:
// numeric lookup, then name search, then category browse (type,
// ability, weakness), then the plain paginated listing. Remote
// failures degrade to an empty page carrying an error snapshot
// instead of surfacing as Err.

use std::collections::HashSet;

use futures_util::future::join_all;

use crate::criteria::SearchCriteria;
use crate::effectiveness;
use crate::error::{ApiError, ErrorKind};
use crate::evolution;
use crate::filters::{self, FilterKey};
use crate::mapper;
use crate::pokeapi::{EvolutionChainData, GenerationData, NamedAPIResource, SpeciesData};
use crate::pokemon::{AbilityDetails, EvolutionStage, Pokemon};
use crate::remote::RemoteSource;
use crate::sort;

/// Results per page, matching the upstream listing default.
pub const PAGE_SIZE: u32 = 40;

/// Big enough to cover the whole national index in one listing call.
pub const FULL_ROSTER_LIMIT: u32 = 1302;

/// One resolved page of results plus whether another page exists.
/// `error` is set when the page is empty because the remote failed,
/// not because nothing matched.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ResolvedPage {
    pub items: Vec<Pokemon>,
    pub has_more: bool,
    pub error: Option<ErrorKind>,
}

impl ResolvedPage {
    fn failed(error: &ApiError) -> Self {
        ResolvedPage {
            error: Some(error.kind()),
            ..ResolvedPage::default()
        }
    }
}

/// Stateless query pipeline over a [`RemoteSource`]. Each call fetches
/// the references a query names, hydrates them concurrently, then
/// applies the client-side filters and sort.
pub struct QueryCoordinator<S> {
    source: S,
}

impl<S: RemoteSource> QueryCoordinator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves the page the criteria describe.
    pub async fn resolve_page(&self, criteria: &SearchCriteria) -> ResolvedPage {
        if let Some(digits) = criteria.digit_query() {
            return self.resolve_by_number(digits).await;
        }
        if let Some(name) = &criteria.name {
            return self.resolve_by_name(name, criteria).await;
        }
        if let Some(type_name) = &criteria.r#type {
            return self.resolve_category_page("type", type_name, criteria).await;
        }
        if let Some(ability) = &criteria.ability {
            return self.resolve_category_page("ability", ability, criteria).await;
        }
        if let Some(weakness) = &criteria.weakness {
            return self.resolve_by_weakness(weakness, criteria).await;
        }
        self.resolve_plain_page(criteria).await
    }

    /// Resolves one page of a category browse, e.g. `type/water` or
    /// `region/kanto`. A name criterion narrows the references before
    /// pagination; the filter dimension the category already satisfies
    /// is not re-applied client-side.
    pub async fn resolve_category_page(
        &self,
        kind: &str,
        value: &str,
        criteria: &SearchCriteria,
    ) -> ResolvedPage {
        let mut refs = match self.category_refs(kind, value).await {
            Ok(refs) => refs,
            Err(e) => {
                if e.is_not_found() {
                    tracing::debug!("Unknown category {}/{}", kind, value);
                    return ResolvedPage::default();
                }
                tracing::warn!("Category {}/{} failed: {}", kind, value, e);
                return ResolvedPage::failed(&e);
            }
        };

        if let Some(query) = &criteria.name {
            let needle = query.trim().to_lowercase();
            refs.retain(|reference| reference.name.contains(&needle));
        }

        let (page_refs, has_more) = paginate(&refs, criteria.page);
        let items = self.hydrate(page_refs).await;
        ResolvedPage {
            items: self.finish(items, criteria, filters::filter_key_for_category(kind)),
            has_more,
            error: None,
        }
    }

    /// Fetches one Pokémon with its evolution chain resolved. A chain
    /// that fails to load degrades to an empty chain; a failed primary
    /// lookup is the caller's to handle.
    pub async fn resolve_details(&self, token: &str) -> Result<Pokemon, ApiError> {
        let mut pokemon = self.source.fetch_by_name_or_id(token).await.map_err(|e| {
            if e.is_not_found() {
                tracing::debug!("No Pokémon for token {}", token);
            } else {
                tracing::warn!("Detail lookup for {} failed: {}", token, e);
            }
            e
        })?;

        pokemon.evolution_chain = self.resolve_evolution(&pokemon).await;
        Ok(pokemon)
    }

    /// Fetches the full ability index, hydrated and sorted by display
    /// name. Abilities that fail to load are dropped.
    pub async fn resolve_all_abilities(&self) -> Vec<AbilityDetails> {
        let refs = match self.source.fetch_all_ability_refs().await {
            Ok(refs) => refs,
            Err(e) => {
                tracing::warn!("Ability index fetch failed: {}", e);
                return Vec::new();
            }
        };

        let futures = refs.iter().map(|reference| async move {
            let token = if reference.url.is_empty() {
                reference.name.clone()
            } else {
                reference.url.clone()
            };
            match self.source.fetch_ability_details(&token).await {
                Ok(details) => Some(details),
                Err(e) => {
                    tracing::debug!("Dropping ability {}: {}", reference.name, e);
                    None
                }
            }
        });

        let mut abilities: Vec<AbilityDetails> =
            join_all(futures).await.into_iter().flatten().collect();
        abilities.sort_by(|a, b| a.localized_name.cmp(&b.localized_name));
        abilities
    }

    // An exact id lookup skips the remaining filters; the page is the
    // hit or nothing.
    async fn resolve_by_number(&self, digits: &str) -> ResolvedPage {
        match self.source.fetch_by_name_or_id(digits).await {
            Ok(pokemon) => ResolvedPage {
                items: vec![pokemon],
                has_more: false,
                error: None,
            },
            Err(e) => {
                if e.is_not_found() {
                    tracing::debug!("No Pokémon numbered {}", digits);
                    return ResolvedPage::default();
                }
                tracing::warn!("Number lookup for {} failed: {}", digits, e);
                ResolvedPage::failed(&e)
            }
        }
    }

    // Name search scans the whole index for substring matches, then
    // pages through the matches.
    async fn resolve_by_name(&self, query: &str, criteria: &SearchCriteria) -> ResolvedPage {
        let roster = match self.source.fetch_list(FULL_ROSTER_LIMIT, 0).await {
            Ok(page) => page.items,
            Err(e) => {
                tracing::warn!("Roster fetch for name search failed: {}", e);
                return ResolvedPage::failed(&e);
            }
        };

        let needle = query.trim().to_lowercase();
        let matches: Vec<NamedAPIResource> = roster
            .into_iter()
            .filter(|reference| reference.name.contains(&needle))
            .collect();

        let (page_refs, has_more) = paginate(&matches, criteria.page);
        let items = self.hydrate(page_refs).await;
        ResolvedPage {
            items: self.finish(items, criteria, None),
            has_more,
            error: None,
        }
    }

    // Weakness browse is the union of every type the attack is super
    // effective against. An attack the chart does not know falls back
    // to the plain listing; the weakness filter is then a no-op.
    async fn resolve_by_weakness(&self, attack: &str, criteria: &SearchCriteria) -> ResolvedPage {
        let Some(targets) = effectiveness::super_effective_against(attack) else {
            tracing::debug!("Unknown attack type {} for weakness browse", attack);
            return self.resolve_plain_page(criteria).await;
        };

        let mut seen = HashSet::new();
        let mut refs = Vec::new();
        for target in targets {
            match self.category_refs("type", target).await {
                Ok(type_refs) => {
                    for reference in type_refs {
                        if seen.insert(reference.name.clone()) {
                            refs.push(reference);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Type {} unavailable during weakness browse: {}", target, e);
                }
            }
        }

        let (page_refs, has_more) = paginate(&refs, criteria.page);
        let items = self.hydrate(page_refs).await;
        ResolvedPage {
            items: self.finish(items, criteria, Some(FilterKey::Weakness)),
            has_more,
            error: None,
        }
    }

    async fn resolve_plain_page(&self, criteria: &SearchCriteria) -> ResolvedPage {
        let page = criteria.page.max(1);
        let offset = (page - 1) * PAGE_SIZE;

        let listing = match self.source.fetch_list(PAGE_SIZE, offset).await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!("Pokémon listing failed: {}", e);
                return ResolvedPage::failed(&e);
            }
        };

        let has_more = listing.has_next;
        let items = self.hydrate(listing.items).await;
        ResolvedPage {
            items: self.finish(items, criteria, None),
            has_more,
            error: None,
        }
    }

    // Resolves the references a category names. Regions hop through
    // their main generation; type and ability carry Pokémon directly,
    // the rest carry species.
    async fn category_refs(&self, kind: &str, value: &str) -> Result<Vec<NamedAPIResource>, ApiError> {
        let category = self.source.fetch_category(kind, value).await?;

        if kind == "region" {
            let Some(generation) = category.main_generation else {
                tracing::debug!("Region {} has no main generation", value);
                return Ok(Vec::new());
            };
            let raw = self.source.fetch_raw(&generation.url).await?;
            let generation: GenerationData = serde_json::from_value(raw)
                .map_err(|e| ApiError::MappingDefect(format!("generation payload: {}", e)))?;
            return Ok(generation.pokemon_species);
        }

        if !category.pokemon.is_empty() {
            return Ok(category
                .pokemon
                .into_iter()
                .filter_map(|slot| slot.pokemon)
                .collect());
        }
        Ok(category.pokemon_species)
    }

    // Fan-out fetch of one page of references. Order follows the
    // reference list; failed entries are dropped from the page.
    async fn hydrate(&self, refs: Vec<NamedAPIResource>) -> Vec<Pokemon> {
        let futures = refs.iter().map(|reference| async move {
            match self.source.fetch_by_name_or_id(&resource_token(reference)).await {
                Ok(pokemon) => Some(pokemon),
                Err(e) => {
                    tracing::debug!("Dropping {} from page: {}", reference.name, e);
                    None
                }
            }
        });

        join_all(futures).await.into_iter().flatten().collect()
    }

    fn finish(
        &self,
        items: Vec<Pokemon>,
        criteria: &SearchCriteria,
        skip: Option<FilterKey>,
    ) -> Vec<Pokemon> {
        let mut items = filters::apply_filters(items, criteria, skip);
        sort::sort_pokemon(&mut items, criteria.sort);
        items
    }

    async fn resolve_evolution(&self, pokemon: &Pokemon) -> Vec<EvolutionStage> {
        let Some(species_url) = &pokemon.species_url else {
            return Vec::new();
        };

        let species: SpeciesData = match self.source.fetch_raw(species_url).await {
            Ok(raw) => match serde_json::from_value(raw) {
                Ok(species) => species,
                Err(e) => {
                    tracing::warn!("Species payload for {} unreadable: {}", pokemon.name, e);
                    return Vec::new();
                }
            },
            Err(e) => {
                tracing::warn!("Species fetch for {} failed: {}", pokemon.name, e);
                return Vec::new();
            }
        };

        let Some(chain_ref) = species.evolution_chain else {
            return Vec::new();
        };

        let chain: EvolutionChainData = match self.source.fetch_raw(&chain_ref.url).await {
            Ok(raw) => match serde_json::from_value(raw) {
                Ok(chain) => chain,
                Err(e) => {
                    tracing::warn!("Evolution chain for {} unreadable: {}", pokemon.name, e);
                    return Vec::new();
                }
            },
            Err(e) => {
                tracing::warn!("Evolution chain fetch for {} failed: {}", pokemon.name, e);
                return Vec::new();
            }
        };

        match chain.chain {
            Some(root) => evolution::resolve_chain(&self.source, &root).await,
            None => Vec::new(),
        }
    }
}

// Species references point at `/pokemon-species/{id}/`; the matching
// Pokémon lives at `/pokemon/{id}`, so those resolve by id instead.
fn resource_token(reference: &NamedAPIResource) -> String {
    if reference.url.contains("/pokemon-species/") {
        if let Some(id) = mapper::trailing_id(&reference.url) {
            return id.to_string();
        }
    }
    if reference.url.is_empty() {
        reference.name.clone()
    } else {
        reference.url.clone()
    }
}

fn paginate(refs: &[NamedAPIResource], page: u32) -> (Vec<NamedAPIResource>, bool) {
    let page = page.max(1) as usize;
    let page_size = PAGE_SIZE as usize;
    let start = (page - 1) * page_size;
    if start >= refs.len() {
        return (Vec::new(), false);
    }
    let end = (start + page_size).min(refs.len());
    (refs[start..end].to_vec(), end < refs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::SearchCriteria;
    use crate::pokeapi::{CategoryData, CategoryPokemonSlot};
    use crate::remote::stub::{self, StubSource};
    use crate::sort::SortKey;
    use serde_json::json;

    fn ids(page: &ResolvedPage) -> Vec<u32> {
        page.items.iter().map(|p| p.id).collect()
    }

    fn type_category(entries: &[(u32, &str)]) -> CategoryData {
        CategoryData {
            pokemon: entries
                .iter()
                .map(|(id, name)| CategoryPokemonSlot {
                    pokemon: Some(stub::reference(name, &stub::pokemon_url(*id))),
                    slot: 1,
                })
                .collect(),
            pokemon_species: Vec::new(),
            main_generation: None,
        }
    }

    #[tokio::test]
    async fn test_numeric_query_resolves_one_pokemon() {
        let mut source = StubSource::default();
        source.add_pokemon(stub::mon(25, "pikachu", &["electric"]));
        let coordinator = QueryCoordinator::new(source);

        let mut criteria = SearchCriteria::default();
        criteria.name = Some("25".to_string());

        let page = coordinator.resolve_page(&criteria).await;
        assert_eq!(ids(&page), vec![25]);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_numeric_query_ignores_remaining_filters() {
        let mut source = StubSource::default();
        source.add_pokemon(stub::mon(25, "pikachu", &["electric"]));
        let coordinator = QueryCoordinator::new(source);

        // An exact id lookup answers even when other filters disagree.
        let mut criteria = SearchCriteria::default();
        criteria.name = Some("25".to_string());
        criteria.r#type = Some("water".to_string());

        let page = coordinator.resolve_page(&criteria).await;
        assert_eq!(ids(&page), vec![25]);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_unknown_number_yields_empty_page() {
        let coordinator = QueryCoordinator::new(StubSource::default());

        let mut criteria = SearchCriteria::default();
        criteria.name = Some("9999".to_string());

        let page = coordinator.resolve_page(&criteria).await;
        assert!(page.items.is_empty());
        assert!(!page.has_more);
        // Nothing matched, but nothing failed either.
        assert!(page.error.is_none());
    }

    #[tokio::test]
    async fn test_remote_failure_is_reported_on_the_page() {
        let mut source = StubSource::default();
        source.fail_lists = true;
        let coordinator = QueryCoordinator::new(source);

        let page = coordinator.resolve_page(&SearchCriteria::default()).await;
        assert!(page.items.is_empty());
        assert_eq!(page.error, Some(crate::error::ErrorKind::RemoteUnavailable));
    }

    #[tokio::test]
    async fn test_name_search_matches_substrings() {
        let mut source = StubSource::default();
        for (id, name) in [(25, "pikachu"), (26, "raichu"), (172, "pichu"), (1, "bulbasaur")] {
            source.add_pokemon(stub::mon(id, name, &["electric"]));
            source.add_roster_entry(id, name);
        }
        let coordinator = QueryCoordinator::new(source);

        let mut criteria = SearchCriteria::default();
        criteria.name = Some("chu".to_string());

        let page = coordinator.resolve_page(&criteria).await;
        assert_eq!(ids(&page), vec![25, 26, 172]);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_category_pages_are_cut_at_page_size() {
        let mut source = StubSource::default();
        let mut entries = Vec::new();
        for id in 1..=45 {
            let name = format!("water-{:02}", id);
            source.add_pokemon(stub::mon(id, &name, &["water"]));
            entries.push((id, name));
        }
        let borrowed: Vec<(u32, &str)> =
            entries.iter().map(|(id, name)| (*id, name.as_str())).collect();
        source.add_category("type", "water", type_category(&borrowed));
        let coordinator = QueryCoordinator::new(source);

        let mut criteria = SearchCriteria::default();
        criteria.r#type = Some("water".to_string());

        let first = coordinator.resolve_page(&criteria).await;
        assert_eq!(first.items.len(), 40);
        assert!(first.has_more);

        criteria.page = 2;
        let second = coordinator.resolve_page(&criteria).await;
        assert_eq!(ids(&second), (41..=45).collect::<Vec<u32>>());
        assert!(!second.has_more);
    }

    #[tokio::test]
    async fn test_category_page_narrows_by_name() {
        let mut source = StubSource::default();
        source.add_pokemon(stub::mon(7, "squirtle", &["water"]));
        source.add_pokemon(stub::mon(9, "blastoise", &["water"]));
        source.add_category("type", "water", type_category(&[(7, "squirtle"), (9, "blastoise")]));
        let coordinator = QueryCoordinator::new(source);

        let mut criteria = SearchCriteria::default();
        criteria.name = Some("toise".to_string());

        let page = coordinator.resolve_category_page("type", "water", &criteria).await;
        assert_eq!(ids(&page), vec![9]);
    }

    #[tokio::test]
    async fn test_region_browse_hops_through_its_generation() {
        let mut source = StubSource::default();
        source.add_pokemon(stub::mon(1, "bulbasaur", &["grass"]));
        source.add_pokemon(stub::mon(4, "charmander", &["fire"]));

        let generation_url = "https://pokeapi.co/api/v2/generation/1/";
        source.add_category(
            "region",
            "kanto",
            CategoryData {
                pokemon: Vec::new(),
                pokemon_species: Vec::new(),
                main_generation: Some(stub::reference("generation-i", generation_url)),
            },
        );
        source.raw.insert(
            generation_url.to_string(),
            json!({
                "pokemon_species": [
                    { "name": "bulbasaur", "url": stub::species_url(1) },
                    { "name": "charmander", "url": stub::species_url(4) },
                ]
            }),
        );
        let coordinator = QueryCoordinator::new(source);

        let criteria = SearchCriteria::default();
        let page = coordinator.resolve_category_page("region", "kanto", &criteria).await;
        assert_eq!(ids(&page), vec![1, 4]);

        // Species references must resolve through /pokemon/{id}.
        let calls = coordinator.source().recorded_calls();
        assert!(calls.contains(&"pokemon:1".to_string()));
        assert!(calls.contains(&format!("raw:{}", generation_url)));
    }

    #[tokio::test]
    async fn test_region_without_generation_is_an_empty_page() {
        let mut source = StubSource::default();
        source.add_category("region", "hoenn", CategoryData::default());
        let coordinator = QueryCoordinator::new(source);

        let criteria = SearchCriteria::default();
        let page = coordinator.resolve_category_page("region", "hoenn", &criteria).await;
        assert!(page.items.is_empty());
        assert!(page.error.is_none());
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_weakness_browse_unions_types_without_duplicates() {
        let mut source = StubSource::default();
        source.add_pokemon(stub::mon(1, "bulbasaur", &["grass", "poison"]));
        source.add_pokemon(stub::mon(46, "paras", &["bug", "grass"]));
        source.add_pokemon(stub::mon(10, "caterpie", &["bug"]));

        // Fire hits grass, ice, bug and steel; only two of those
        // categories exist here and paras sits in both.
        source.add_category("type", "grass", type_category(&[(1, "bulbasaur"), (46, "paras")]));
        source.add_category("type", "bug", type_category(&[(46, "paras"), (10, "caterpie")]));
        let coordinator = QueryCoordinator::new(source);

        let mut criteria = SearchCriteria::default();
        criteria.weakness = Some("fire".to_string());

        let page = coordinator.resolve_page(&criteria).await;
        assert_eq!(ids(&page), vec![1, 10, 46]);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_unknown_weakness_falls_back_to_plain_listing() {
        let mut source = StubSource::default();
        source.add_pokemon(stub::mon(1, "bulbasaur", &["grass"]));
        source.add_roster_entry(1, "bulbasaur");
        let coordinator = QueryCoordinator::new(source);

        let mut criteria = SearchCriteria::default();
        criteria.weakness = Some("cosmic".to_string());

        let page = coordinator.resolve_page(&criteria).await;
        assert_eq!(ids(&page), vec![1]);
    }

    #[tokio::test]
    async fn test_plain_listing_reports_more_pages() {
        let mut source = StubSource::default();
        for id in 1..=41 {
            let name = format!("mon-{:03}", id);
            source.add_pokemon(stub::mon(id, &name, &["normal"]));
            source.add_roster_entry(id, &name);
        }
        let coordinator = QueryCoordinator::new(source);

        let criteria = SearchCriteria::default();
        let page = coordinator.resolve_page(&criteria).await;
        assert_eq!(page.items.len(), 40);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn test_filters_and_sort_shape_every_route() {
        let mut source = StubSource::default();
        let mut light = stub::mon(7, "squirtle", &["water"]);
        light.weight = Some(9.0);
        let mut heavy = stub::mon(9, "blastoise", &["water"]);
        heavy.weight = Some(85.5);
        let mut heavier = stub::mon(130, "gyarados", &["water", "flying"]);
        heavier.weight = Some(235.0);
        source.add_pokemon(light);
        source.add_pokemon(heavy);
        source.add_pokemon(heavier);
        source.add_category(
            "type",
            "water",
            type_category(&[(7, "squirtle"), (9, "blastoise"), (130, "gyarados")]),
        );
        let coordinator = QueryCoordinator::new(source);

        let mut criteria = SearchCriteria::default();
        criteria.r#type = Some("water".to_string());
        criteria.weight = Some(crate::criteria::WeightBucket::Heavy);
        criteria.sort = SortKey::NameAsc;

        let page = coordinator.resolve_page(&criteria).await;
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["blastoise", "gyarados"]);
    }

    #[tokio::test]
    async fn test_details_resolve_the_evolution_chain() {
        let mut source = StubSource::default();
        let mut pikachu = stub::mon(25, "pikachu", &["electric"]);
        pikachu.species_url = Some(stub::species_url(25));
        source.add_pokemon(pikachu);
        source.add_pokemon(stub::mon(172, "pichu", &["electric"]));
        source.add_pokemon(stub::mon(26, "raichu", &["electric"]));

        let chain_url = "https://pokeapi.co/api/v2/evolution-chain/10/";
        source.raw.insert(
            stub::species_url(25),
            json!({ "evolution_chain": { "url": chain_url } }),
        );
        source.raw.insert(
            chain_url.to_string(),
            json!({
                "chain": {
                    "species": { "name": "pichu", "url": stub::species_url(172) },
                    "evolves_to": [{
                        "species": { "name": "pikachu", "url": stub::species_url(25) },
                        "evolves_to": [{
                            "species": { "name": "raichu", "url": stub::species_url(26) },
                            "evolves_to": []
                        }]
                    }]
                }
            }),
        );
        let coordinator = QueryCoordinator::new(source);

        let pokemon = coordinator.resolve_details("pikachu").await.unwrap();
        let stages: Vec<&str> = pokemon
            .evolution_chain
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(stages, vec!["pichu", "pikachu", "raichu"]);
    }

    #[tokio::test]
    async fn test_details_survive_a_missing_species_document() {
        let mut source = StubSource::default();
        let mut pikachu = stub::mon(25, "pikachu", &["electric"]);
        pikachu.species_url = Some(stub::species_url(25));
        source.add_pokemon(pikachu);
        // No raw species payload registered.
        let coordinator = QueryCoordinator::new(source);

        let pokemon = coordinator.resolve_details("pikachu").await.unwrap();
        assert!(pokemon.evolution_chain.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_detail_token_is_not_found() {
        let coordinator = QueryCoordinator::new(StubSource::default());

        let result = coordinator.resolve_details("missingno").await;
        assert!(result.is_err_and(|e| e.is_not_found()));
    }

    #[tokio::test]
    async fn test_abilities_come_back_sorted_by_display_name() {
        let mut source = StubSource::default();
        for (id, name, localized) in [(65, "overgrow", "Overgrow"), (9, "static", "Static")] {
            let url = format!("https://pokeapi.co/api/v2/ability/{}/", id);
            source.ability_refs.push(stub::reference(name, &url));
            source.abilities.insert(
                url.clone(),
                crate::pokemon::AbilityDetails {
                    id,
                    name: name.to_string(),
                    localized_name: localized.to_string(),
                    description: String::new(),
                    url,
                },
            );
        }
        // Listed out of display order on purpose.
        source.ability_refs.reverse();
        let coordinator = QueryCoordinator::new(source);

        let abilities = coordinator.resolve_all_abilities().await;
        let names: Vec<&str> = abilities.iter().map(|a| a.localized_name.as_str()).collect();
        assert_eq!(names, vec!["Overgrow", "Static"]);
    }
}
