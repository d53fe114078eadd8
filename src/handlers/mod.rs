//! HTTP handlers.

pub mod person;
