//! REST API routes (Axum).

use crate::config::ServerConfig;
use axum::{routing::get, Router};
use festivos_calendar::{HolidayService, InMemoryCatalog};
use std::sync::Arc;

mod handlers;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Holiday lookup over the configured catalog.
    pub service: HolidayService<InMemoryCatalog>,
    /// Boundary configuration (accepted year window).
    pub config: ServerConfig,
}

impl AppState {
    /// Build the shared state from a service and its boundary config.
    pub fn new(service: HolidayService<InMemoryCatalog>, config: ServerConfig) -> Self {
        Self { service, config }
    }
}

/// Create the REST API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Holiday lookups
        .route(
            "/holidays/verify/{year}/{month}/{day}",
            get(handlers::verify),
        )
        .route("/holidays/list/{year}", get(handlers::list))
        .with_state(state)
}
