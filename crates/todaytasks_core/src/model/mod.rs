//! Domain model for the today's-tasks list.
//!
//! # Responsibility
//! - Define the canonical task record rendered by the UI.
//!
//! # Invariants
//! - A task is identified by its text and its position in the list.
//! - Task text is always the trimmed, accepted form of user input.

pub mod task;
