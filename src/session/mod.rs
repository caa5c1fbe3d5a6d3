//! Viewer session management module
//!
//! This module contains:
//! - Viewer state (current index, clamped navigation)
//! - Command types produced by the input router
//! - Input routing for keys, text submission and buttons
//! - The viewer state machine driving both panes

pub mod messages;
pub mod shortcuts;
pub mod state;
pub mod viewer;
