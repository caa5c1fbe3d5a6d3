//! Startup configuration for crownview
//!
//! Values come from the cosmic-config entry (if one exists) and are then
//! overridden by command-line flags. Nothing is written back.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

/// Default dataset root
pub const DATA_DIR: &str = "data";
/// Image directory name inside the dataset root
pub const IMAGE_DIR_NAME: &str = "images";
/// Annotation file name inside the dataset root
pub const ANNOTATION_FILE_NAME: &str = "train_annotations.json";

/// What to do with a segmentation that has an odd number of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeometryPolicy {
    /// Fail the render (and refuse to open a dataset containing one)
    #[default]
    Abort,
    /// Leave the annotation out of the overlay
    Skip,
}

/// Built-in processing applied to the right pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum ProcessorKind {
    /// Show the source image unchanged
    #[default]
    Identity,
    /// Luma conversion
    Grayscale,
    /// Per-channel inversion
    Invert,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct ViewerConfig {
    /// Dataset annotation file
    pub annotation_path: PathBuf,
    /// Directory the dataset's `file_name` entries are relative to
    pub image_dir: PathBuf,
    /// Handling of malformed segmentations
    pub geometry_policy: GeometryPolicy,
    /// Right pane processing
    pub processor: ProcessorKind,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::for_data_dir(Path::new(DATA_DIR))
    }
}

impl ViewerConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "io.github.crownview.CrownView";

    /// Configuration using the standard `images/` + `train_annotations.json` layout
    pub fn for_data_dir(data_dir: &Path) -> Self {
        Self {
            annotation_path: data_dir.join(ANNOTATION_FILE_NAME),
            image_dir: data_dir.join(IMAGE_DIR_NAME),
            geometry_policy: GeometryPolicy::default(),
            processor: ProcessorKind::default(),
        }
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Apply command-line overrides
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(data_dir) = &cli.data_dir {
            let layout = Self::for_data_dir(data_dir);
            self.annotation_path = layout.annotation_path;
            self.image_dir = layout.image_dir;
        }
        if let Some(path) = &cli.annotations {
            self.annotation_path = path.clone();
        }
        if let Some(dir) = &cli.images {
            self.image_dir = dir.clone();
        }
        if cli.skip_malformed {
            self.geometry_policy = GeometryPolicy::Skip;
        }
        if let Some(kind) = cli.processor {
            self.processor = kind;
        }
        self
    }
}

/// Browse tree-crown segmentations over their source images
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dataset root containing `images/` and `train_annotations.json`
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Annotation file (overrides --data-dir)
    #[arg(long, value_name = "PATH")]
    pub annotations: Option<PathBuf>,

    /// Image directory (overrides --data-dir)
    #[arg(long, value_name = "DIR")]
    pub images: Option<PathBuf>,

    /// Leave out malformed segmentations instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Processing applied to the right pane
    #[arg(long, value_enum)]
    pub processor: Option<ProcessorKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = ViewerConfig::default();
        assert_eq!(config.annotation_path, Path::new("data/train_annotations.json"));
        assert_eq!(config.image_dir, Path::new("data/images"));
        assert_eq!(config.geometry_policy, GeometryPolicy::Abort);
        assert_eq!(config.processor, ProcessorKind::Identity);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "crownview",
            "--data-dir",
            "/srv/forest",
            "--images",
            "/mnt/tiles",
            "--skip-malformed",
            "--processor",
            "grayscale",
        ]);
        let config = ViewerConfig::default().with_cli(&cli);
        assert_eq!(config.annotation_path, Path::new("/srv/forest/train_annotations.json"));
        assert_eq!(config.image_dir, Path::new("/mnt/tiles"));
        assert_eq!(config.geometry_policy, GeometryPolicy::Skip);
        assert_eq!(config.processor, ProcessorKind::Grayscale);
    }

    #[test]
    fn test_empty_cli_keeps_config() {
        let config = ViewerConfig::for_data_dir(Path::new("elsewhere"));
        assert_eq!(config.clone().with_cli(&Cli::default()), config);
    }
}
