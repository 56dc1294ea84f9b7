use axum::{
    Json, Router, debug_handler,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_browse::{
    AbilityDetails, ApiError, Config, CriteriaUpdate, ErrorKind, PokeApiClient, Pokedex,
    PokedexState, Pokemon, QueryCoordinator, ResolvedPage, SearchCriteria,
};

struct AppState {
    pokedex: Pokedex<PokeApiClient>,
}

fn status_for(error: &ApiError) -> StatusCode {
    match error.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::RemoteUnavailable => StatusCode::BAD_GATEWAY,
        ErrorKind::MappingDefect => StatusCode::BAD_GATEWAY,
        ErrorKind::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let bind_addr = config.server.bind.clone();
    let client = PokeApiClient::new(&config);
    let pokedex = Pokedex::new(QueryCoordinator::new(client));

    let app_state = Arc::new(AppState { pokedex });

    let app = Router::new()
        .route("/pokemon", get(browse_pokemon_handler))
        .route("/pokemon/more", post(load_more_handler))
        .route("/pokemon/reset", post(reset_handler))
        .route("/pokemon/{token}", get(get_pokemon_handler))
        .route("/abilities", get(abilities_handler))
        .route("/category/{kind}/{value}", get(category_handler))
        .route("/random", get(get_random_pokemon_handler))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

// GET /pokemon?name=&type=&weakness=&ability=&height=&weight=&sort=
// Applies the query as a criteria update and returns the refreshed
// session. Omitted fields keep their current value; "." clears one.
#[debug_handler]
async fn browse_pokemon_handler(
    State(app_state): State<Arc<AppState>>,
    Query(update): Query<CriteriaUpdate>,
) -> (StatusCode, Json<PokedexState>) {
    app_state.pokedex.set_filters(&update).await;
    (StatusCode::OK, Json(app_state.pokedex.snapshot()))
}

#[debug_handler]
async fn load_more_handler(
    State(app_state): State<Arc<AppState>>,
) -> (StatusCode, Json<PokedexState>) {
    app_state.pokedex.load_more().await;
    (StatusCode::OK, Json(app_state.pokedex.snapshot()))
}

#[debug_handler]
async fn reset_handler(
    State(app_state): State<Arc<AppState>>,
) -> (StatusCode, Json<PokedexState>) {
    app_state.pokedex.reset_filters().await;
    (StatusCode::OK, Json(app_state.pokedex.snapshot()))
}

#[debug_handler]
async fn get_pokemon_handler(
    State(app_state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> (StatusCode, Json<Option<Pokemon>>) {
    match app_state.pokedex.fetch_details(&token).await {
        Ok(pokemon) => (StatusCode::OK, Json(Some(pokemon))),
        Err(e) => {
            tracing::debug!("Detail request for {} failed: {}", token, e);
            (status_for(&e), Json(None))
        }
    }
}

#[debug_handler]
async fn abilities_handler(
    State(app_state): State<Arc<AppState>>,
) -> (StatusCode, Json<Vec<AbilityDetails>>) {
    app_state.pokedex.load_abilities().await;
    (StatusCode::OK, Json(app_state.pokedex.snapshot().abilities))
}

// GET /category/{kind}/{value}?page=N plus any filter overrides.
// Stateless: the page is resolved directly without touching the
// browse session.
#[debug_handler]
async fn category_handler(
    State(app_state): State<Arc<AppState>>,
    Path((kind, value)): Path<(String, String)>,
    Query(update): Query<CriteriaUpdate>,
) -> (StatusCode, Json<ResolvedPage>) {
    let mut criteria = SearchCriteria::default().apply(&update);
    criteria.page = update.page.unwrap_or(1);

    let page = app_state
        .pokedex
        .coordinator()
        .resolve_category_page(&kind, &value, &criteria)
        .await;
    (StatusCode::OK, Json(page))
}

#[debug_handler]
async fn get_random_pokemon_handler(
    State(app_state): State<Arc<AppState>>,
) -> (StatusCode, Json<Option<Pokemon>>) {
    let random_pokemon: u32 = rand::random_range(1..=1025);
    tracing::debug!("Surprise pick: Pokémon ID {}", random_pokemon);

    match app_state.pokedex.fetch_details(&random_pokemon.to_string()).await {
        Ok(pokemon) => (StatusCode::OK, Json(Some(pokemon))),
        Err(e) => {
            tracing::error!("Failed to fetch Pokémon ID {}: {}", random_pokemon, e);
            (status_for(&e), Json(None))
        }
    }
}
