//! HTTP router and shared request state.
//!
//! This module owns the state every handler sees (cache, upstream provider,
//! festival dataset) and maps the public paths onto the route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use tower_http::trace::TraceLayer;

use almanac_client::{FetchError, HolidayProvider, NagerClient, NagerConfig};
use almanac_core::{AppConfig, FestivalStore, MemoryCache, ResponseCache};

use crate::error::ApiError;
use crate::routes::{
    Envelope,
    festivals::{FestivalListing, FestivalsParams, festivals_impl, listing_impl},
    health::{HealthOutput, health_impl},
    holidays::{HolidaysParams, holidays_impl},
};

/// State shared by every request.
///
/// The cache is the only mutable piece; it is owned here rather than held
/// in a global so another [`ResponseCache`] can be plugged in.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn ResponseCache>,
    pub provider: Arc<dyn HolidayProvider>,
    pub festivals: FestivalStore,
}

impl AppState {
    pub fn new(cache: Arc<dyn ResponseCache>, provider: Arc<dyn HolidayProvider>, festivals: FestivalStore) -> Self {
        Self { cache, provider, festivals }
    }

    /// Build production state: unbounded memory cache and the Nager.Date client.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let provider = NagerClient::new(NagerConfig::from(config))?;
        Ok(Self::new(
            Arc::new(MemoryCache::new()),
            Arc::new(provider),
            FestivalStore::new(config.festivals_dir.clone()),
        ))
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/holidays", get(holidays))
        .route("/festivals", get(festivals))
        .route("/festivals/test", get(festivals_listing))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Json<HealthOutput> {
    Json(health_impl())
}

async fn holidays(
    State(state): State<AppState>, query: Result<Query<HolidaysParams>, QueryRejection>,
) -> Result<Json<Envelope>, ApiError> {
    // Undeserializable query strings (repeated keys) share the validation body.
    let Query(params) = query.map_err(|e| ApiError::validation_failed(e.body_text()))?;
    holidays_impl(&state, params).await.map(Json)
}

async fn festivals(
    State(state): State<AppState>, query: Result<Query<FestivalsParams>, QueryRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::validation_failed(e.body_text()))?;
    festivals_impl(&state, params).map(Json)
}

async fn festivals_listing(State(state): State<AppState>) -> Result<Json<FestivalListing>, ApiError> {
    listing_impl(&state).map(Json)
}
