use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Settings for a grid view, loadable from a JSON file. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub tile_width: u32,
    pub tile_height: u32,
    pub tiles_x: u32,
    pub tiles_y: u32,
    pub zoom: u32,
    pub show_borders: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_width: 8,
            tile_height: 8,
            tiles_x: 32,
            tiles_y: 32,
            zoom: 2,
            show_borders: true,
            viewport_width: 512,
            viewport_height: 384,
        }
    }
}

impl GridConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "tile size must be non-zero, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        if self.zoom == 0 {
            return Err(ConfigError::Invalid("zoom must be at least 1".to_string()));
        }
        Ok(())
    }
}
