//! Task list storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered, session-scoped list of accepted tasks.
//! - Keep append/remove semantics independent from validation policy.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Stores never validate; callers pass text that already passed the
//!   validator.

pub mod task_store;
