//! Viewer configuration
//!
//! Every field has a default matching the original demo, so an empty JSON
//! object (or no file at all) yields the stock four-projection setup.

use crate::core::constants::{
    DEFAULT_DATA_SOURCE, DEFAULT_WINDOW_SIZE, DRAG_SENSITIVITY, LABEL_TRAVEL_PERCENT, MAX_OFFSET,
};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Largest offset on either axis, in degrees
    pub max_offset: f64,
    /// Degrees of offset per pixel of drag
    pub drag_sensitivity: f64,
    /// Label travel at full offset, in percent of the container
    pub label_travel_percent: f64,
    /// File path or http(s) URL of the GeoJSON outline
    pub data_source: String,
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_offset: MAX_OFFSET,
            drag_sensitivity: DRAG_SENSITIVITY,
            label_travel_percent: LABEL_TRAVEL_PERCENT,
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl ViewerConfig {
    /// Parses a JSON config; absent fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("loaded viewer config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Like [`ViewerConfig::load`], but a missing file means defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            log::debug!(
                "no config at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.max_offset.is_finite() && self.max_offset > 0.0) {
            return Err(MapError::Config(format!(
                "max_offset must be positive, got {}",
                self.max_offset
            )));
        }
        if !(self.drag_sensitivity.is_finite() && self.drag_sensitivity > 0.0) {
            return Err(MapError::Config(format!(
                "drag_sensitivity must be positive, got {}",
                self.drag_sensitivity
            )));
        }
        if !(self.label_travel_percent > 0.0 && self.label_travel_percent <= 50.0) {
            return Err(MapError::Config(format!(
                "label_travel_percent must be in (0, 50], got {}",
                self.label_travel_percent
            )));
        }
        if self.data_source.trim().is_empty() {
            return Err(MapError::Config("data_source is empty".to_string()));
        }
        if self.window_size.iter().any(|v| !(*v >= 1.0)) {
            return Err(MapError::Config(format!(
                "window_size must be at least 1x1, got {:?}",
                self.window_size
            )));
        }
        Ok(())
    }
}
