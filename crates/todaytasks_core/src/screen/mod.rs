//! Screen-level controllers consumed by the presentation layer.

pub mod task_screen;
