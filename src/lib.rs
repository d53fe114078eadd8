//! Person service: CRUD over a single `person` table exposed as a REST API.
//!
//! Layers, top to bottom: [`handlers`] (HTTP input and output), [`service`]
//! (domain operations), [`repository`] (SQL). [`store`], [`config`] and
//! [`telemetry`] hold the process bootstrap used by the server binary.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{AppConfig, Env};
pub use error::{AppError, ConfigError, ErrorKind};
pub use models::{Person, PersonInput};
pub use repository::PersonRepository;
pub use routes::{app, person_routes};
pub use service::PersonService;
pub use state::AppState;
pub use store::{connect, ensure_person_table};
pub use telemetry::{init_tracing, RequestLog, TracingLog};
