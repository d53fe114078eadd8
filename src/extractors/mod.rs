//! Request extractors that log malformed input and reject with 400.

mod person;
pub use person::{Pagination, PersonBody, PersonId, DEFAULT_LIMIT, DEFAULT_OFFSET};
