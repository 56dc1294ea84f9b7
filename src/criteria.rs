// criteria.rs
// The search criteria record and the partial updates that replace it.

use crate::sort::SortKey;
use serde::{Deserialize, Serialize};

/// Wire sentinel the UI sends for "unset"; parsed to `None` here.
const UNSET: &str = ".";

/// One immutable set of browse criteria. Never mutated in place: any
/// change goes through [`SearchCriteria::apply`], which produces a new
/// record with the page rewound to 1. Only an explicit page advance
/// (load-more) moves `page`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub weakness: Option<String>,
    pub ability: Option<String>,
    pub height: Option<HeightBucket>,
    pub weight: Option<WeightBucket>,
    pub sort: SortKey,
    /// 1-based.
    pub page: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            name: None,
            r#type: None,
            weakness: None,
            ability: None,
            height: None,
            weight: None,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl SearchCriteria {
    /// Merges the update into a new record with the page rewound to 1.
    /// Absent update fields keep the current value; the `"."` sentinel
    /// and the empty string clear a field.
    pub fn apply(&self, update: &CriteriaUpdate) -> SearchCriteria {
        SearchCriteria {
            name: merge_token(&self.name, &update.name),
            r#type: merge_token(&self.r#type, &update.r#type),
            weakness: merge_token(&self.weakness, &update.weakness),
            ability: merge_token(&self.ability, &update.ability),
            height: match &update.height {
                None => self.height,
                Some(token) => HeightBucket::parse(token),
            },
            weight: match &update.weight {
                None => self.weight,
                Some(token) => WeightBucket::parse(token),
            },
            sort: match &update.sort {
                None => self.sort,
                Some(token) => SortKey::parse(token),
            },
            page: 1,
        }
    }

    /// Same criteria one page further (the load-more cursor).
    pub fn next_page(&self) -> SearchCriteria {
        let mut next = self.clone();
        next.page += 1;
        next
    }

    /// The name criterion when it is a pure digit string, i.e. an id
    /// lookup rather than a substring search.
    pub fn digit_query(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }
}

/// Partial criteria change, as sent by the surface. `None` leaves a
/// field untouched. `page` is ignored by the session store (which owns
/// its cursor) but honored by stateless category browsing.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct CriteriaUpdate {
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub weakness: Option<String>,
    pub ability: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
}

fn parse_token(token: &str) -> Option<String> {
    if token == UNSET || token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn merge_token(current: &Option<String>, update: &Option<String>) -> Option<String> {
    match update {
        None => current.clone(),
        Some(token) => parse_token(token),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightBucket {
    Small,
    Medium,
    Large,
}

impl HeightBucket {
    /// Unknown tokens parse to `None`, which downstream treats as a
    /// pass-through rather than an error.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "small" => Some(HeightBucket::Small),
            "medium" => Some(HeightBucket::Medium),
            "large" => Some(HeightBucket::Large),
            _ => None,
        }
    }

    /// Bucket ranges in meters: small `<1`, medium `[1,2]`, large `>2`.
    pub fn contains(self, meters: f64) -> bool {
        match self {
            HeightBucket::Small => meters < 1.0,
            HeightBucket::Medium => (1.0..=2.0).contains(&meters),
            HeightBucket::Large => meters > 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightBucket {
    Light,
    Medium,
    Heavy,
}

impl WeightBucket {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "light" => Some(WeightBucket::Light),
            "medium" => Some(WeightBucket::Medium),
            "heavy" => Some(WeightBucket::Heavy),
            _ => None,
        }
    }

    /// Bucket ranges in kilograms: light `<10`, medium `[10,50]`,
    /// heavy `>50`.
    pub fn contains(self, kilograms: f64) -> bool {
        match self {
            WeightBucket::Light => kilograms < 10.0,
            WeightBucket::Medium => (10.0..=50.0).contains(&kilograms),
            WeightBucket::Heavy => kilograms > 50.0,
        }
    }
}
