// evolution.rs
// Walks an evolution chain document into display stages. The chain is
// a tree (branching evolutions exist); stages come out in pre-order so
// each branch reads base form first.

use crate::mapper;
use crate::pokeapi::ChainLink;
use crate::pokemon::EvolutionStage;
use crate::remote::RemoteSource;

/// Resolves every species in the chain to an id, name and sprite. A
/// species that fails to load is skipped; the rest of the chain still
/// renders.
pub async fn resolve_chain<S>(source: &S, root: &ChainLink) -> Vec<EvolutionStage>
where
    S: RemoteSource + ?Sized,
{
    let mut stages = Vec::new();
    let mut pending = vec![root];

    while let Some(link) = pending.pop() {
        if let Some(stage) = resolve_stage(source, link).await {
            stages.push(stage);
        }

        // Reversed push keeps siblings in document order off the stack.
        for child in link.evolves_to.iter().rev() {
            pending.push(child);
        }
    }

    stages
}

async fn resolve_stage<S>(source: &S, link: &ChainLink) -> Option<EvolutionStage>
where
    S: RemoteSource + ?Sized,
{
    let id = match mapper::trailing_id(&link.species.url) {
        Some(id) => id,
        None => {
            tracing::debug!(
                "Evolution stage {} has no id in its species URL",
                link.species.name
            );
            return None;
        }
    };

    match source.fetch_by_id(id).await {
        Ok(pokemon) => Some(EvolutionStage {
            id: pokemon.id,
            name: pokemon.name.clone(),
            image: pokemon.image().map(|url| url.to_string()),
        }),
        Err(e) => {
            tracing::debug!("Skipping evolution stage {}: {}", link.species.name, e);
            None
        }
    }
}
