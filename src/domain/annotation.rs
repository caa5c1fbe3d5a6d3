//! Annotation types for tree-crown segmentations
//!
//! Coordinates are stored as read from the dataset and decoded lazily at
//! render time, so a malformed outline only affects the image that shows it.

use serde::{Deserialize, Serialize};

use super::geometry::{self, Polygon};
use crate::error::ViewerError;

/// The one class label with its own overlay color
pub const INDIVIDUAL_TREE: &str = "individual_tree";

/// Overlay color category for a class label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassColor {
    /// `individual_tree`
    IndividualTree,
    /// Every other label
    Other,
}

impl ClassColor {
    pub fn of(label: &str) -> Self {
        if label == INDIVIDUAL_TREE {
            ClassColor::IndividualTree
        } else {
            ClassColor::Other
        }
    }
}

/// A single labelled outline on an image
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Class label, drawn from an open set of strings
    #[serde(rename = "class")]
    pub class_label: String,
    /// Flat alternating x/y pixel coordinates
    pub segmentation: Vec<f64>,
}

impl Annotation {
    #[cfg(test)]
    pub fn new(class_label: impl Into<String>, segmentation: Vec<f64>) -> Self {
        Self {
            class_label: class_label.into(),
            segmentation,
        }
    }

    pub fn polygon(&self) -> Result<Polygon, ViewerError> {
        geometry::decode(&self.segmentation)
    }

    pub fn class_color(&self) -> ClassColor {
        ClassColor::of(&self.class_label)
    }
}
