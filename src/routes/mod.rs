//! Router assembly: person CRUD wrapped in the HTTP layers.

mod person;

pub use person::person_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Request bodies above this size are rejected by the body extractor with 400.
pub const BODY_LIMIT: usize = 64 * 1024;

/// Full application router. `timeout` bounds each request end to end.
pub fn app(state: AppState, timeout: Duration) -> Router {
    person_routes(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
}
