//! Person CRUD routes.

use crate::handlers::person;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn person_routes(state: AppState) -> Router {
    Router::new()
        .route("/person", get(person::get).post(person::create))
        .route(
            "/person/:id",
            get(person::get_one).put(person::update).delete(person::delete),
        )
        // An empty id segment reaches the handlers and is rejected by `PersonId`.
        .route(
            "/person/",
            get(person::get_one).put(person::update).delete(person::delete),
        )
        .with_state(state)
}
