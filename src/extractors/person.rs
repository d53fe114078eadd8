//! Path id, pagination query and JSON body for the person routes.

use crate::error::AppError;
use crate::models::PersonInput;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, Method},
};
use serde::Deserialize;

pub const DEFAULT_LIMIT: i64 = 3;
pub const DEFAULT_OFFSET: i64 = 0;

/// Handler name used when logging rejected input, keyed by method.
fn handler_op(method: &Method) -> &'static str {
    match *method {
        Method::POST => "person_handlers.create",
        Method::PUT => "person_handlers.update",
        Method::DELETE => "person_handlers.delete",
        _ => "person_handlers.get_one",
    }
}

fn reject(state: &AppState, op: &'static str, detail: String) -> AppError {
    state.log.malformed_input(op, &detail);
    AppError::BadRequest(detail)
}

fn parse_i64(state: &AppState, op: &'static str, name: &str, raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|e| reject(state, op, format!("{} '{}': {}", name, raw, e)))
}

/// `{id}` path segment parsed as a 64-bit integer.
#[derive(Clone, Copy, Debug)]
pub struct PersonId(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for PersonId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let op = handler_op(&parts.method);
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            // `/person/` carries no id parameter at all.
            Err(PathRejection::MissingPathParams(_)) => String::new(),
            Err(e) => return Err(reject(state, op, e.body_text())),
        };
        if raw.is_empty() {
            return Err(reject(state, op, "param id is empty".into()));
        }
        parse_i64(state, op, "id", &raw).map(PersonId)
    }
}

#[derive(Deserialize)]
struct RawPagination {
    limit: Option<String>,
    offset: Option<String>,
}

/// `limit` and `offset` query parameters; absent or empty values take the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for Pagination {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        const OP: &str = "person_handlers.get";
        let Query(raw) = Query::<RawPagination>::from_request_parts(parts, state)
            .await
            .map_err(|e| reject(state, OP, e.body_text()))?;
        let limit = match raw.limit.as_deref() {
            None | Some("") => DEFAULT_LIMIT,
            Some(s) => parse_i64(state, OP, "limit", s)?,
        };
        let offset = match raw.offset.as_deref() {
            None | Some("") => DEFAULT_OFFSET,
            Some(s) => parse_i64(state, OP, "offset", s)?,
        };
        Ok(Pagination { limit, offset })
    }
}

/// JSON request body for create and update. The content type is not checked.
#[derive(Clone, Debug)]
pub struct PersonBody(pub PersonInput);

#[async_trait]
impl FromRequest<AppState> for PersonBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let op = handler_op(req.method());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| reject(state, op, e.body_text()))?;
        let input = serde_json::from_slice::<PersonInput>(&bytes)
            .map_err(|e| reject(state, op, e.to_string()))?;
        Ok(PersonBody(input))
    }
}
