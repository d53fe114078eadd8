//! Person CRUD handlers: get one, list, create, update, delete.

use crate::error::{AppError, ResultExt};
use crate::extractors::{Pagination, PersonBody, PersonId};
use crate::models::Person;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn get_one(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> Result<Json<Person>, AppError> {
    let person = state
        .persons
        .get_person(id)
        .await
        .context("person_handlers.get_one")?;
    Ok(Json(person))
}

pub async fn get(
    State(state): State<AppState>,
    page: Pagination,
) -> Result<Json<Vec<Person>>, AppError> {
    let persons = state
        .persons
        .get_persons(page.limit, page.offset)
        .await
        .context("person_handlers.get")?;
    Ok(Json(persons))
}

/// Insert, then re-read the row so the response carries exactly what was stored.
pub async fn create(
    State(state): State<AppState>,
    PersonBody(input): PersonBody,
) -> Result<(StatusCode, Json<Person>), AppError> {
    const OP: &str = "person_handlers.create";
    let id = state.persons.create_person(&input).await.context(OP)?;
    let person = state.persons.get_person(id).await.context(OP)?;
    tracing::info!(id, "person created");
    Ok((StatusCode::CREATED, Json(person)))
}

pub async fn update(
    State(state): State<AppState>,
    PersonId(id): PersonId,
    PersonBody(input): PersonBody,
) -> Result<Json<Person>, AppError> {
    const OP: &str = "person_handlers.update";
    let id = state.persons.update_person(&input, id).await.context(OP)?;
    let person = state.persons.get_person(id).await.context(OP)?;
    Ok(Json(person))
}

/// Always 200 with an empty body, whether or not a row was removed.
pub async fn delete(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> Result<StatusCode, AppError> {
    state
        .persons
        .delete_person(id)
        .await
        .context("person_handlers.delete")?;
    Ok(StatusCode::OK)
}
