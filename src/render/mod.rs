//! Annotation overlay rendering
//!
//! This module contains:
//! - Geometry constants and color mapping shared by the overlay
//! - Image rendering using tiny-skia

pub mod geometry;
pub mod image;
