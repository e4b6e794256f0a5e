//! Task list store contract and in-memory implementation.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskStoreResult<T> = Result<T, TaskListError>;

/// Store contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListError {
    /// `index` was not derived from the current snapshot.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "task index {index} out of range for list of length {len}")
            }
        }
    }
}

impl Error for TaskListError {}

/// Ordered task list interface.
pub trait TaskStore {
    /// Adds `text` as the new last element.
    fn append(&mut self, text: String);
    /// Removes and returns the element at `index`.
    ///
    /// The list is unchanged when `index >= len()`.
    fn remove_at(&mut self, index: usize) -> TaskStoreResult<String>;
    /// Current contents in display order.
    fn snapshot(&self) -> Vec<String>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session-scoped task list kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store with already-accepted entries.
    pub fn with_tasks<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tasks: tasks.into_iter().map(Task::new).collect(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl TaskStore for InMemoryTaskStore {
    fn append(&mut self, text: String) {
        self.tasks.push(Task::new(text));
    }

    fn remove_at(&mut self, index: usize) -> TaskStoreResult<String> {
        let len = self.tasks.len();
        if index >= len {
            return Err(TaskListError::IndexOutOfRange { index, len });
        }
        Ok(self.tasks.remove(index).into())
    }

    fn snapshot(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.text.clone()).collect()
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
