//! Error types for the viewer

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// Segmentation with an odd number of coordinates
    #[error("malformed geometry: {len} coordinates do not form x/y pairs")]
    MalformedGeometry { len: usize },

    #[error("cannot find image {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("cannot decode image {}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Jump text that is not an integer; recovered by the input router
    #[error("invalid navigation input {0:?}")]
    InvalidNavigationInput(String),

    #[error("dataset contains no images")]
    EmptyDataset,

    #[error("failed to read dataset {}", path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {}", path.display())]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
