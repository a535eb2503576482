//! Persisted camera calibration.
//!
//! The file is a flat JSON object keyed by [`CameraConfig`] field names.
//! Missing keys fall back to defaults and unknown keys are ignored, so older
//! or hand-trimmed files keep loading.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use balltrack_models::CameraConfig;
use tracing::{info, warn};

use crate::error::TrackerResult;

/// Loads and saves the camera calibration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the calibration, or defaults when no file exists yet.
    ///
    /// A file that exists but is unreadable, malformed, or fails validation
    /// is an error rather than a silent fallback.
    pub fn load(&self) -> TrackerResult<CameraConfig> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Calibration file {} not found. Using default values.",
                    self.path.display()
                );
                return Ok(CameraConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: CameraConfig = serde_json::from_str(&text)?;
        config.validate()?;

        info!("Loaded calibration from {}", self.path.display());
        Ok(config)
    }

    /// Write the calibration, replacing any previous file.
    pub fn save(&self, config: &CameraConfig) -> TrackerResult<()> {
        config.validate()?;

        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, json)?;

        info!("Saved calibration to {}", self.path.display());
        Ok(())
    }
}
