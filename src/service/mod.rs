//! Domain layer between the HTTP handlers and the repository.

mod person;
pub use person::PersonService;
