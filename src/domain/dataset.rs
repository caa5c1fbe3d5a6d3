//! Annotation dataset loaded once at startup

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::annotation::Annotation;
use crate::error::ViewerError;

/// One image and its annotations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub file_name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ImageRecord {
    #[cfg(test)]
    pub fn new(file_name: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            file_name: file_name.into(),
            annotations,
        }
    }
}

/// An annotation whose segmentation cannot be decoded
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedAnnotation {
    pub image_index: usize,
    pub annotation_index: usize,
    pub coordinate_count: usize,
}

/// Ordered, read-only collection of image records
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    images: Vec<ImageRecord>,
}

impl Dataset {
    #[cfg(test)]
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self { images }
    }

    /// Read and parse a dataset file
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(|source| ViewerError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|source| ViewerError::DatasetParse {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(
            "Loaded {} images with {} annotations from {}",
            dataset.len(),
            dataset.annotation_count(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn annotation_count(&self) -> usize {
        self.images.iter().map(|img| img.annotations.len()).sum()
    }

    /// Find every annotation with an odd-length segmentation
    pub fn malformed_annotations(&self) -> Vec<MalformedAnnotation> {
        self.images
            .iter()
            .enumerate()
            .flat_map(|(image_index, image)| {
                image
                    .annotations
                    .iter()
                    .enumerate()
                    .filter(|(_, ann)| ann.segmentation.len() % 2 != 0)
                    .map(move |(annotation_index, ann)| MalformedAnnotation {
                        image_index,
                        annotation_index,
                        coordinate_count: ann.segmentation.len(),
                    })
            })
            .collect()
    }
}
