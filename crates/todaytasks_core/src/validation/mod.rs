//! Task acceptance gate.
//!
//! # Responsibility
//! - Decide whether candidate text may enter today's task list.
//! - Report exactly one rejection reason, the earliest failing rule.
//!
//! # Invariants
//! - Validation is a pure function of candidate, existing entries and rules.
//! - Validation runs at insertion time only; stored tasks are never
//!   re-validated.

pub mod validator;
