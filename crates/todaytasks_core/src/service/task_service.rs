//! Task list use-case service.
//!
//! # Responsibility
//! - Gate every insertion through the validator, consulted against the
//!   store's current snapshot.
//! - Route tap-to-remove straight to the store.
//!
//! # Invariants
//! - Only trimmed, accepted text is appended.
//! - Removal never consults the validator.
//! - Log events carry metadata only, never task text.

use crate::store::task_store::{TaskStore, TaskStoreResult};
use crate::validation::validator::{TaskValidator, ValidationResult};
use log::{debug, error, info};

/// Use-case wrapper pairing one store with one validator.
pub struct TaskService<S: TaskStore> {
    store: S,
    validator: TaskValidator,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S, validator: TaskValidator) -> Self {
        Self { store, validator }
    }

    /// Creates a service using the default rule tables.
    pub fn with_default_rules(store: S) -> Self {
        Self::new(store, TaskValidator::default())
    }

    /// Validates `candidate` and appends its trimmed form on success.
    ///
    /// # Contract
    /// - Returns the stored text on success.
    /// - On rejection the list is unchanged.
    pub fn add_task(&mut self, candidate: &str) -> ValidationResult {
        let existing = self.store.snapshot();
        match self.validator.validate(candidate, &existing) {
            Ok(text) => {
                self.store.append(text.clone());
                info!(
                    "event=task_add module=service status=ok chars={} len={}",
                    text.chars().count(),
                    self.store.len()
                );
                Ok(text)
            }
            Err(reason) => {
                debug!(
                    "event=task_add module=service status=rejected reason={}",
                    reason.code()
                );
                Err(reason)
            }
        }
    }

    /// Removes the tapped task.
    ///
    /// An out-of-range index means the caller did not derive it from the
    /// current snapshot.
    pub fn complete_task(&mut self, index: usize) -> TaskStoreResult<String> {
        match self.store.remove_at(index) {
            Ok(text) => {
                info!(
                    "event=task_complete module=service status=ok index={} len={}",
                    index,
                    self.store.len()
                );
                Ok(text)
            }
            Err(err) => {
                error!(
                    "event=task_complete module=service status=error index={} len={}",
                    index,
                    self.store.len()
                );
                Err(err)
            }
        }
    }

    pub fn tasks(&self) -> Vec<String> {
        self.store.snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn validator(&self) -> &TaskValidator {
        &self.validator
    }
}
