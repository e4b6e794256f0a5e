//! Flutter bridge for the Today's Tasks core.

pub mod api;
