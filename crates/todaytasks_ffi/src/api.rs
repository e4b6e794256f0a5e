//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose validation and task-list operations to Dart via FRB.
//! - Flatten core errors into envelopes the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Rejection messages are the fixed user-facing strings from core.
//! - Rules are fixed at most once per process: by `init_rules`, or by the
//!   first validation or session, which locks in the defaults.

use std::sync::OnceLock;
use todaytasks_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    InMemoryTaskStore, TaskService, TaskValidator, ValidationRules,
};

static ACTIVE_VALIDATOR: OnceLock<TaskValidator> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Installs validation rules from a JSON document.
///
/// # FFI contract
/// - Must run before the first `validate_task` or `TaskSession::new`; either
///   locks in the default rules.
/// - Idempotent for an identical rule set; a different set is rejected.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_rules(json: String) -> String {
    let validator = match ValidationRules::from_json(json.as_str()).and_then(TaskValidator::new) {
        Ok(validator) => validator,
        Err(err) => return format!("init_rules failed: {err}"),
    };

    let active = ACTIVE_VALIDATOR.get_or_init(|| validator.clone());
    if active.rules() != validator.rules() {
        return "rules already initialized; refusing to switch".to_string();
    }
    log::info!("event=rules_init module=ffi status=ok");
    String::new()
}

/// Validation outcome envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResponse {
    pub accepted: bool,
    /// Canonical trimmed text when accepted.
    pub text: Option<String>,
    /// Stable rejection code (`too_short`, `duplicate`, ...).
    pub reason_code: Option<String>,
    /// User-facing rejection message; empty when accepted.
    pub message: String,
}

/// Checks `candidate` against `existing` without touching any list.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_task(candidate: String, existing: Vec<String>) -> ValidationResponse {
    match active_validator().validate(candidate.as_str(), &existing) {
        Ok(text) => ValidationResponse {
            accepted: true,
            text: Some(text),
            reason_code: None,
            message: String::new(),
        },
        Err(reason) => ValidationResponse {
            accepted: false,
            text: None,
            reason_code: Some(reason.code().to_string()),
            message: reason.message(),
        },
    }
}

/// Action envelope returned by `TaskSession` mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    pub ok: bool,
    /// Added or removed task text.
    pub text: Option<String>,
    /// Stable rejection code for refused submissions.
    pub reason_code: Option<String>,
    /// Human-readable message for alert/diagnostics.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, text: String) -> Self {
        Self {
            ok: true,
            text: Some(text),
            reason_code: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>, reason_code: Option<String>) -> Self {
        Self {
            ok: false,
            text: None,
            reason_code,
            message: message.into(),
        }
    }
}

/// One screen's task list, owned by the Dart side.
#[flutter_rust_bridge::frb(opaque)]
pub struct TaskSession {
    service: TaskService<InMemoryTaskStore>,
}

impl TaskSession {
    /// Starts an empty list using the installed (or default) rules.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            service: TaskService::new(InMemoryTaskStore::new(), active_validator().clone()),
        }
    }

    /// Validates and appends `candidate`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn submit(&mut self, candidate: String) -> TaskActionResponse {
        match self.service.add_task(candidate.as_str()) {
            Ok(text) => TaskActionResponse::success("Task added.", text),
            Err(reason) => {
                TaskActionResponse::failure(reason.message(), Some(reason.code().to_string()))
            }
        }
    }

    /// Removes the tapped task at `index`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn remove_at(&mut self, index: u32) -> TaskActionResponse {
        match self.service.complete_task(index as usize) {
            Ok(text) => TaskActionResponse::success("Task completed.", text),
            Err(err) => TaskActionResponse::failure(format!("remove_at failed: {err}"), None),
        }
    }

    /// Current list in display order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> Vec<String> {
        self.service.tasks()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn len(&self) -> u32 {
        u32::try_from(self.service.len()).unwrap_or(u32::MAX)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn is_empty(&self) -> bool {
        self.service.is_empty()
    }
}

impl Default for TaskSession {
    fn default() -> Self {
        Self::new()
    }
}

fn active_validator() -> &'static TaskValidator {
    ACTIVE_VALIDATOR.get_or_init(TaskValidator::default)
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, validate_task, TaskSession};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn validate_task_reports_code_and_message() {
        let rejected = validate_task("abc".to_string(), Vec::new());
        assert!(!rejected.accepted);
        assert_eq!(rejected.reason_code.as_deref(), Some("too_short"));
        assert_eq!(rejected.message, "task must have at least 5 characters.");

        let accepted = validate_task(" Buy milk ".to_string(), vec!["Call mom".to_string()]);
        assert!(accepted.accepted);
        assert_eq!(accepted.text.as_deref(), Some("Buy milk"));
        assert!(accepted.message.is_empty());
    }

    #[test]
    fn session_submit_and_remove_follow_list_contract() {
        let mut session = TaskSession::new();
        assert!(session.is_empty());

        let added = session.submit("Buy milk".to_string());
        assert!(added.ok, "{}", added.message);
        assert_eq!(added.text.as_deref(), Some("Buy milk"));

        let duplicate = session.submit("Buy milk".to_string());
        assert!(!duplicate.ok);
        assert_eq!(duplicate.reason_code.as_deref(), Some("duplicate"));
        assert_eq!(duplicate.message, "this task has already been added.");
        assert_eq!(session.snapshot(), vec!["Buy milk"]);

        let removed = session.remove_at(0);
        assert!(removed.ok);
        assert_eq!(removed.text.as_deref(), Some("Buy milk"));
        assert_eq!(session.len(), 0);
    }

    #[test]
    fn session_remove_at_out_of_range_fails_without_panicking() {
        let mut session = TaskSession::default();
        let response = session.remove_at(7);
        assert!(!response.ok);
        assert!(response.reason_code.is_none());
        assert!(response.message.contains("out of range"));
    }
}
