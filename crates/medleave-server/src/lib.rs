//! Medleave HTTP API.
//!
//! Translates JSON-over-HTTP requests into record-store calls and store
//! outcomes into status codes. No business rules live here beyond
//! field-presence validation; the store is injected at startup and
//! shared behind a mutex, one logical operation per request.

use axum::http::Method;
use axum::routing::{get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use anyhow::Context;
use medleave_core::Database;

mod config;
mod error;
mod routes;

pub use config::{load_server_config, ServerConfig, DEFAULT_PORT};
pub use error::ApiError;
pub use routes::{LeavePayload, SearchRequest};

/// Shared state for the axum application.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }
}

/// Build the API router around an injected record store.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(Any);

    Router::new()
        .route("/api/health", get(routes::health))
        .route(
            "/api/medical-leaves",
            post(routes::create_leave).get(routes::list_leaves),
        )
        .route("/api/medical-leaves/search", post(routes::search_leave))
        .route(
            "/api/medical-leaves/:service_code",
            put(routes::update_leave).delete(routes::delete_leave),
        )
        .with_state(state)
        .layer(cors)
}

/// Open the database, bind, and serve until ctrl-c.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let db = Database::open(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;

    let app = app(AppState::new(db));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;

    tracing::info!("medleave API server listening on {addr}");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server failed")?;

    tracing::info!("medleave API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
