//! Shared application state for all routes.

use crate::service::PersonService;
use crate::telemetry::{RequestLog, TracingLog};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub persons: PersonService,
    pub log: Arc<dyn RequestLog>,
}

impl AppState {
    pub fn new(persons: PersonService) -> Self {
        Self {
            persons,
            log: Arc::new(TracingLog),
        }
    }

    pub fn with_log(mut self, log: Arc<dyn RequestLog>) -> Self {
        self.log = log;
        self
    }
}
