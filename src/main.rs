//! Team Builder
//!
//! Lists a fixed set of user records, filters and paginates them, and builds
//! a team with at most one member per domain. All state lives in memory.

mod api;
mod config;
mod engine;
mod errors;
mod models;
mod render;
mod session;
mod source;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use session::SessionStore;
use source::RecordSource;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single operator session; each request holds the lock for its whole transition.
    pub session: Arc<Mutex<SessionStore>>,
    pub source: Arc<RecordSource>,
}

impl AppState {
    pub fn new(source: Arc<RecordSource>, filter_cache_capacity: usize) -> Self {
        let session = SessionStore::new(Arc::clone(&source), filter_cache_capacity);
        Self {
            session: Arc::new(Mutex::new(session)),
            source,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Team Builder");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Filter cache capacity: {}", config.filter_cache_capacity);

    // Load the record source once; it is never mutated afterwards
    let source = Arc::new(RecordSource::load(config.data_path.as_deref())?);
    tracing::info!(
        "Loaded {} user records across {} domains",
        source.len(),
        source.domains().len()
    );
    if source.is_empty() {
        tracing::warn!("Record source is empty; the page will show no users");
    }

    let state = AppState::new(source, config.filter_cache_capacity);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Session
        .route("/session", get(api::get_session))
        .route("/session/revision", get(api::get_revision))
        .route("/session/intents", post(api::dispatch_intent))
        .route("/options", get(api::get_options))
        // Records
        .route("/users", get(api::list_users))
        .route("/users/{id}", get(api::get_user))
        // Team
        .route("/team", get(api::get_team).post(api::add_to_team));

    // Rendered page
    let ui_routes = Router::new()
        .route("/", get(api::index))
        .route(render::INTENT_PATH, post(api::ui_intent));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(ui_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
