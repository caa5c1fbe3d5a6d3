//! Pure domain types with minimal dependencies
//!
//! This module contains the dataset representation shared by the renderer
//! and the viewer session. Types here have no framework dependencies
//! (cosmic, iced, etc.).

pub mod annotation;
pub mod dataset;
pub mod geometry;

pub use annotation::*;
pub use dataset::*;
pub use geometry::*;
