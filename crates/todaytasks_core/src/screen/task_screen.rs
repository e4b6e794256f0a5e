//! Today's-tasks screen controller.
//!
//! # Responsibility
//! - Own the pending input and the task service for one screen session.
//! - Notify the presentation layer after every state change and on every
//!   rejected submission.
//!
//! # Invariants
//! - Pending input is cleared only after a successful add.
//! - A missing or empty pending input makes `submit` a no-op.
//! - `on_refresh` always receives the full snapshot in display order.

use crate::service::task_service::TaskService;
use crate::store::task_store::{TaskStore, TaskStoreResult};
use crate::validation::validator::RejectionReason;

/// Heading rendered above the list.
pub const SECTION_TITLE: &str = "Today's tasks";
/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "Write a task";
/// Title of the alert raised for rejected submissions.
pub const ERROR_TITLE: &str = "Error";

/// Presentation hooks supplied by the UI layer.
pub struct TaskScreenCallbacks {
    /// Receives the current task list after each change.
    pub on_refresh: Box<dyn Fn(&[String])>,
    /// Displays an error to the user as `(title, message)`.
    pub on_error: Box<dyn Fn(&str, &str)>,
}

impl TaskScreenCallbacks {
    /// Callbacks that ignore every notification.
    pub fn noop() -> Self {
        Self {
            on_refresh: Box::new(|_: &[String]| {}),
            on_error: Box::new(|_: &str, _: &str| {}),
        }
    }
}

/// Result of one press on the add button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was typed; no validation ran.
    Ignored,
    /// Task appended with this canonical text.
    Added(String),
    /// Validation failed; input kept for correction.
    Rejected(RejectionReason),
}

pub struct TaskScreen<S: TaskStore> {
    service: TaskService<S>,
    input: Option<String>,
    callbacks: TaskScreenCallbacks,
}

impl<S: TaskStore> TaskScreen<S> {
    /// Creates the screen and pushes the initial list to `on_refresh`.
    pub fn new(service: TaskService<S>, callbacks: TaskScreenCallbacks) -> Self {
        let screen = Self {
            service,
            input: None,
            callbacks,
        };
        screen.refresh();
        screen
    }

    /// Replaces the pending input, as on every keystroke.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = Some(text.into());
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Submits the pending input.
    pub fn submit(&mut self) -> SubmitOutcome {
        let candidate = match self.input.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => return SubmitOutcome::Ignored,
        };

        match self.service.add_task(candidate) {
            Ok(text) => {
                self.input = None;
                self.refresh();
                SubmitOutcome::Added(text)
            }
            Err(reason) => {
                (self.callbacks.on_error)(ERROR_TITLE, &reason.message());
                SubmitOutcome::Rejected(reason)
            }
        }
    }

    /// Removes the tapped item.
    pub fn tap(&mut self, index: usize) -> TaskStoreResult<String> {
        let removed = self.service.complete_task(index)?;
        self.refresh();
        Ok(removed)
    }

    pub fn tasks(&self) -> Vec<String> {
        self.service.tasks()
    }

    pub fn service(&self) -> &TaskService<S> {
        &self.service
    }

    fn refresh(&self) {
        (self.callbacks.on_refresh)(&self.service.tasks());
    }
}
