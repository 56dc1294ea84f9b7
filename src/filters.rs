// filters.rs
// Filter strategies over mapped result lists. Each strategy is a pure
// pass over the accumulated list; unset criteria are pass-throughs.

use crate::criteria::{HeightBucket, SearchCriteria, WeightBucket};
use crate::effectiveness;
use crate::pokemon::Pokemon;

/// Criteria dimensions that an upstream category query can satisfy.
/// When a page was already narrowed by a category call, the matching
/// client-side filter is skipped so the same dimension is not applied
/// twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Type,
    Weakness,
}

/// The client-side filter a category kind satisfies, if it has one.
/// `ability`, `generation`, `pokemon-habitat` and `region` have no
/// client-side counterpart: their narrowing exists only upstream.
pub fn filter_key_for_category(kind: &str) -> Option<FilterKey> {
    match kind {
        "type" => Some(FilterKey::Type),
        _ => None,
    }
}

pub fn by_type(list: Vec<Pokemon>, type_name: &str) -> Vec<Pokemon> {
    list.into_iter()
        .filter(|p| p.types.iter().any(|t| t.eq_ignore_ascii_case(type_name)))
        .collect()
}

pub fn by_height(list: Vec<Pokemon>, bucket: HeightBucket) -> Vec<Pokemon> {
    list.into_iter()
        .filter(|p| p.height.is_some_and(|meters| bucket.contains(meters)))
        .collect()
}

pub fn by_weight(list: Vec<Pokemon>, bucket: WeightBucket) -> Vec<Pokemon> {
    list.into_iter()
        .filter(|p| p.weight.is_some_and(|kilograms| bucket.contains(kilograms)))
        .collect()
}

/// Keeps Pokémon weak to `attack`. An attack type the chart does not
/// know leaves the list unchanged.
pub fn by_weakness(list: Vec<Pokemon>, attack: &str) -> Vec<Pokemon> {
    if effectiveness::super_effective_against(attack).is_none() {
        return list;
    }
    list.into_iter()
        .filter(|p| effectiveness::is_weak_to(&p.types, attack))
        .collect()
}

/// The filter pipeline: type → height → weight → weakness. `skip`
/// names the dimension already satisfied by a category query.
pub fn apply_filters(
    mut list: Vec<Pokemon>,
    criteria: &SearchCriteria,
    skip: Option<FilterKey>,
) -> Vec<Pokemon> {
    if skip != Some(FilterKey::Type) {
        if let Some(type_name) = &criteria.r#type {
            list = by_type(list, type_name);
        }
    }
    if let Some(bucket) = criteria.height {
        list = by_height(list, bucket);
    }
    if let Some(bucket) = criteria.weight {
        list = by_weight(list, bucket);
    }
    if skip != Some(FilterKey::Weakness) {
        if let Some(attack) = &criteria.weakness {
            list = by_weakness(list, attack);
        }
    }
    list
}
