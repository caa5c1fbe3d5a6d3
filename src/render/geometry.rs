//! Shared constants and math for overlay rendering

use crate::domain::{ClassColor, Point};

/// Outline geometry constants
pub mod outline {
    /// Stroke width in image pixels
    pub const THICKNESS: f32 = 3.0;
    /// Offset from an integer pixel coordinate to that pixel's center
    pub const PIXEL_CENTER: f32 = 0.5;
}

/// Overlay colors (RGB)
pub mod palette {
    /// Color for `individual_tree` outlines
    pub const INDIVIDUAL_TREE: [u8; 3] = [255, 0, 0];
    /// Color for every other class
    pub const OTHER_CLASS: [u8; 3] = [0, 0, 255];
}

/// Overlay color for a class category
#[inline]
pub fn class_rgb(class: ClassColor) -> [u8; 3] {
    match class {
        ClassColor::IndividualTree => palette::INDIVIDUAL_TREE,
        ClassColor::Other => palette::OTHER_CLASS,
    }
}

/// Map an integer pixel coordinate to the center of that pixel
#[inline]
pub fn pixel_center(point: Point) -> (f32, f32) {
    (
        point.x as f32 + outline::PIXEL_CENTER,
        point.y as f32 + outline::PIXEL_CENTER,
    )
}
