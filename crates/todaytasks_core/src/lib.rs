//! Core domain logic for Today's Tasks.
//! This crate is the single source of truth for task acceptance rules.

pub mod logging;
pub mod model;
pub mod rules;
pub mod screen;
pub mod service;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::Task;
pub use rules::config::{default_rules, RulesConfigError, ValidationRules};
pub use rules::locale::{CharRange, InitialLetterRule};
pub use screen::task_screen::{
    SubmitOutcome, TaskScreen, TaskScreenCallbacks, ERROR_TITLE, INPUT_PLACEHOLDER, SECTION_TITLE,
};
pub use service::task_service::TaskService;
pub use store::task_store::{InMemoryTaskStore, TaskListError, TaskStore, TaskStoreResult};
pub use validation::validator::{
    default_validator, validate, RejectionReason, TaskValidator, ValidationResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
