//! Task domain model.
//!
//! # Responsibility
//! - Define the record stored in the in-memory task list.
//!
//! # Invariants
//! - `text` is non-empty and has no leading/trailing whitespace once it has
//!   passed the validator.
//! - There is no update-in-place: a task only ever appears or disappears.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One accepted entry of today's task list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Display text, stored in its canonical trimmed form.
    pub text: String,
}

impl Task {
    /// Wraps already-accepted text.
    ///
    /// This constructor does not validate; callers go through
    /// `TaskValidator` first.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Task> for String {
    fn from(value: Task) -> Self {
        value.text
    }
}
