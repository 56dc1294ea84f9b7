// sort.rs
// Sort strategies selectable by the ordering token the UI sends.

use crate::pokemon::Pokemon;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    IdAsc,
    NameAsc,
    NameDesc,
    HeightAsc,
    HeightDesc,
    WeightAsc,
    WeightDesc,
}

impl SortKey {
    /// `"-"`-prefixed tokens sort descending; anything unrecognized
    /// falls back to id order.
    pub fn parse(token: &str) -> SortKey {
        match token {
            "name" => SortKey::NameAsc,
            "-name" => SortKey::NameDesc,
            "height" => SortKey::HeightAsc,
            "-height" => SortKey::HeightDesc,
            "weight" => SortKey::WeightAsc,
            "-weight" => SortKey::WeightDesc,
            _ => SortKey::IdAsc,
        }
    }
}

/// Stable in-place sort; ties keep their input order. Missing
/// height/weight sorts after every reported value in both directions.
pub fn sort_pokemon(list: &mut [Pokemon], key: SortKey) {
    match key {
        SortKey::IdAsc => list.sort_by_key(|p| p.id),
        SortKey::NameAsc => list.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => list.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::HeightAsc => list.sort_by(|a, b| cmp_metric(a.height, b.height, false)),
        SortKey::HeightDesc => list.sort_by(|a, b| cmp_metric(a.height, b.height, true)),
        SortKey::WeightAsc => list.sort_by(|a, b| cmp_metric(a.weight, b.weight, false)),
        SortKey::WeightDesc => list.sort_by(|a, b| cmp_metric(a.weight, b.weight, true)),
    }
}

fn cmp_metric(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                y.total_cmp(&x)
            } else {
                x.total_cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
