//! Validation rule configuration.
//!
//! # Responsibility
//! - Expose the disallowed-symbol set, forbidden-word list and length bounds
//!   as named configuration.
//! - Keep locale-specific character classes as data, not code.
//!
//! # Invariants
//! - Rules are loaded once and never mutated at runtime.

pub mod config;
pub mod locale;
