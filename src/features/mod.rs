//! Feature implementations for pomodoro.
//!
//! - Focus mode: the focusing/on-break timer and its collaborators

pub mod focus;
