//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod holes;

use axum::{middleware, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    middleware::{identity_middleware, logging_middleware},
    state::AppState,
};

/// Create all page routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(holes::routes())
}

/// Build the application: routes, static assets, and the middleware stack
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.assets().static_dir);

    Router::new()
        .merge(routes())
        .nest_service("/assets", assets)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), identity_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
