// state.rs
// The observable browse session. One watch channel holds the canonical
// state; every mutation resolves through the coordinator and commits
// through the channel, so subscribers see each transition and a
// superseded load can never clobber a newer one.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::{Mutex, watch};

use crate::coordinator::QueryCoordinator;
use crate::criteria::{CriteriaUpdate, SearchCriteria};
use crate::error::{ApiError, ErrorKind};
use crate::pokemon::{AbilityDetails, Pokemon};
use crate::remote::RemoteSource;

/// Everything a rendering layer needs to draw the session.
#[derive(Debug, Clone, Serialize)]
pub struct PokedexState {
    pub results: Vec<Pokemon>,
    pub criteria: SearchCriteria,
    pub loading: bool,
    pub loading_more: bool,
    pub has_more: bool,
    pub last_error: Option<ErrorKind>,
    pub abilities: Vec<AbilityDetails>,
}

impl Default for PokedexState {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            criteria: SearchCriteria::default(),
            loading: false,
            loading_more: false,
            // Assume a next page exists until the first load says
            // otherwise.
            has_more: true,
            last_error: None,
            abilities: Vec::new(),
        }
    }
}

/// Browse-session store over a [`QueryCoordinator`].
///
/// Filter changes replace the result list wholesale; `load_more`
/// appends. Each filter change bumps a generation counter, and a page
/// resolved under an older generation is discarded at commit time.
pub struct Pokedex<S: RemoteSource> {
    coordinator: QueryCoordinator<S>,
    state: watch::Sender<PokedexState>,
    generation: AtomicU64,
    // Held across the ability roster fetch; at most one load runs.
    abilities_gate: Mutex<()>,
}

impl<S: RemoteSource> Pokedex<S> {
    pub fn new(coordinator: QueryCoordinator<S>) -> Self {
        let (state, _) = watch::channel(PokedexState::default());
        Self {
            coordinator,
            state,
            generation: AtomicU64::new(0),
            abilities_gate: Mutex::new(()),
        }
    }

    /// A live view of the session. The receiver yields a change
    /// notification for every committed transition.
    pub fn subscribe(&self) -> watch::Receiver<PokedexState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> PokedexState {
        self.state.borrow().clone()
    }

    pub fn coordinator(&self) -> &QueryCoordinator<S> {
        &self.coordinator
    }

    /// Applies a criteria update and reloads the first page. The
    /// newest call wins; results resolved for superseded criteria are
    /// dropped.
    pub async fn set_filters(&self, update: &CriteriaUpdate) {
        let criteria = self.snapshot().criteria.apply(update);
        self.reload(criteria).await;
    }

    /// Drops every filter and reloads the default first page.
    pub async fn reset_filters(&self) {
        self.reload(SearchCriteria::default()).await;
    }

    /// Loads the next page for the current criteria and appends it,
    /// skipping Pokémon already shown. Ignored while another load is
    /// running or once the last page was reached.
    pub async fn load_more(&self) {
        let mut job: Option<(SearchCriteria, u64)> = None;
        self.state.send_if_modified(|state| {
            if state.loading || state.loading_more || !state.has_more {
                return false;
            }
            state.loading_more = true;
            job = Some((state.criteria.next_page(), self.current_generation()));
            true
        });

        let Some((criteria, generation)) = job else {
            tracing::debug!("load_more ignored while busy or exhausted");
            return;
        };

        let page = self.coordinator.resolve_page(&criteria).await;

        let committed = self.state.send_if_modified(|state| {
            // A filter change while the page was in flight both bumps
            // the generation and clears loading_more.
            if !self.is_current(generation) || !state.loading_more {
                return false;
            }

            let seen: HashSet<u32> = state.results.iter().map(|p| p.id).collect();
            state
                .results
                .extend(page.items.into_iter().filter(|p| !seen.contains(&p.id)));
            state.criteria = criteria;
            state.has_more = page.has_more;
            state.last_error = page.error;
            state.loading_more = false;
            true
        });

        if !committed {
            tracing::debug!("Dropped stale page for superseded criteria");
        }
    }

    /// Fetches one Pokémon with its evolution chain. The result list
    /// stays untouched; only the load flag and error snapshot move.
    pub async fn fetch_details(&self, token: &str) -> Result<Pokemon, ApiError> {
        self.state.send_modify(|state| {
            state.loading = true;
        });

        let resolved = self.coordinator.resolve_details(token).await;

        self.state.send_modify(|state| {
            state.loading = false;
            state.last_error = resolved.as_ref().err().map(|e| e.kind());
        });

        resolved
    }

    /// Loads the ability index into the session once; later calls are
    /// no-ops, and a call arriving while a load is in flight returns
    /// without fetching. An empty fetch result is not committed, so a
    /// failed load can be retried.
    pub async fn load_abilities(&self) {
        let Ok(_gate) = self.abilities_gate.try_lock() else {
            tracing::debug!("Ability load already in flight");
            return;
        };
        if !self.snapshot().abilities.is_empty() {
            return;
        }

        let abilities = self.coordinator.resolve_all_abilities().await;
        if abilities.is_empty() {
            return;
        }

        self.state.send_modify(|state| {
            state.abilities = abilities;
        });
    }

    async fn reload(&self, criteria: SearchCriteria) {
        let generation = self.next_generation();

        self.state.send_modify(|state| {
            state.criteria = criteria.clone();
            state.loading = true;
            state.loading_more = false;
            state.last_error = None;
        });

        let page = self.coordinator.resolve_page(&criteria).await;

        let committed = self.state.send_if_modified(|state| {
            if !self.is_current(generation) {
                return false;
            }
            state.results = page.items;
            state.has_more = page.has_more;
            state.last_error = page.error;
            state.loading = false;
            true
        });

        if !committed {
            tracing::debug!("Dropped stale page for superseded criteria");
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }
}
