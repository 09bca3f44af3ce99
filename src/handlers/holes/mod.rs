//! Hole page handlers

mod handler;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Hole routes
///
/// Every path not claimed by another route names a hole, so the page is
/// mounted as the fallback rather than a single-segment route.
pub fn routes() -> Router<AppState> {
    Router::new().fallback(get(handler::get_hole))
}
