//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{ws::WebSocketUpgrade, Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use color_core::{CatalogRegistry, NameCatalog};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{load_catalogs, ColorReporter};

/// Application state shared across all handlers.
///
/// Everything here is built once before serving and never mutated, so
/// handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CatalogRegistry>,
    pub names: Arc<NameCatalog>,
    pub reporter: Arc<ColorReporter>,
}

impl AppState {
    /// State over already-built indexes. Only the report settings of
    /// `config` outlive construction.
    pub fn new(config: AppConfig, registry: CatalogRegistry, names: NameCatalog) -> Self {
        let registry = Arc::new(registry);
        let reporter = Arc::new(ColorReporter::new(
            registry.clone(),
            config.report.names_per_report,
        ));
        Self {
            registry,
            names: Arc::new(names),
            reporter,
        }
    }
}

/// Create application state from an asset loader.
///
/// Fails if any catalog cannot be loaded.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    let loaded = load_catalogs(&asset_loader, &config.catalogs)?;
    Ok(AppState::new(config, loaded.registry, loaded.names))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::handle_root))
        .route("/colors/:hex", get(handle_color))
        .route("/lookup", get(handle_lookup))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_color(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    api::handle_color(State(state.reporter), path).await
}

async fn handle_lookup(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    api::handle_lookup(State(state.names), ws).await
}
