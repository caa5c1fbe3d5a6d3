//! Image source for dataset records
//!
//! Images are decoded on demand for every navigation step; nothing is cached.

use std::path::PathBuf;

use image::RgbImage;

use crate::error::ViewerError;

pub trait ImageSource {
    /// Decode the image named by a dataset record into a 3-channel buffer
    fn load(&self, file_name: &str) -> Result<RgbImage, ViewerError>;
}

/// Reads images from a directory on disk
#[derive(Debug, Clone)]
pub struct DiskImageSource {
    dir: PathBuf,
}

impl DiskImageSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ImageSource for DiskImageSource {
    fn load(&self, file_name: &str) -> Result<RgbImage, ViewerError> {
        let path = self.dir.join(file_name);
        if !path.is_file() {
            return Err(ViewerError::ImageNotFound { path });
        }

        let img = image::open(&path).map_err(|source| ViewerError::ImageDecode {
            path: path.clone(),
            source,
        })?;
        log::debug!(
            "Decoded {}: {}x{} pixels",
            path.display(),
            img.width(),
            img.height()
        );
        Ok(img.into_rgb8())
    }
}
