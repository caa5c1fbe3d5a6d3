//! Pixel-space geometry for segmentation outlines

use crate::error::ViewerError;

/// Minimum number of vertices for a polygon to be drawn
pub const MIN_DRAWABLE_POINTS: usize = 3;

/// Integer pixel coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Ordered polygon vertices, stored open (the last point is not repeated)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Polygons with fewer than three vertices have no area and are never drawn
    pub fn is_degenerate(&self) -> bool {
        self.0.len() < MIN_DRAWABLE_POINTS
    }
}

/// Decode a flat `[x0, y0, x1, y1, ...]` segmentation into a polygon.
///
/// Pairs are taken in order with no reordering, deduplication or closing
/// point. Fractional coordinates are truncated toward zero.
pub fn decode(flat_coords: &[f64]) -> Result<Polygon, ViewerError> {
    if flat_coords.len() % 2 != 0 {
        return Err(ViewerError::MalformedGeometry {
            len: flat_coords.len(),
        });
    }

    let points = flat_coords
        .chunks_exact(2)
        .map(|pair| Point::new(to_pixel(pair[0]), to_pixel(pair[1])))
        .collect();

    Ok(Polygon(points))
}

#[inline]
fn to_pixel(value: f64) -> i32 {
    // `as` saturates at the i32 bounds and maps NaN to 0
    value as i32
}
