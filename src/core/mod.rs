//! Core application module
//!
//! This module contains:
//! - Startup: dataset loading, validation and the first render
//! - The Cosmic Application implementation and its display surface

pub mod app;
