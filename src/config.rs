//! Store configuration
//!
//! Everything here is fixed for the lifetime of a store. Missing JSON
//! fields take their defaults.

use crate::error::{Result, WallError};
use crate::style::{Palette, Style};
use serde::{Deserialize, Serialize};

/// Default minimum side length of an image claim
pub const MIN_IMAGE_SIZE: u32 = 10;

/// Default price of one cell
pub const PRICE_PER_CELL: u64 = 1;

/// Tunable rules and styling data for a wall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Image claims smaller than `min_image_size × min_image_size` are rejected
    pub min_image_size: u32,

    /// Price charged per covered cell
    pub price_per_cell: u64,

    /// Source of random text styles
    pub palette: Palette,

    /// Style used when a custom style leaves a field empty
    pub fallback: Style,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            min_image_size: MIN_IMAGE_SIZE,
            price_per_cell: PRICE_PER_CELL,
            palette: Palette::default(),
            fallback: Style::fallback(),
        }
    }
}

impl WallConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: WallConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_min_image_size(mut self, min_image_size: u32) -> Self {
        self.min_image_size = min_image_size;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_image_size == 0 {
            return Err(WallError::InvalidConfig(
                "min_image_size must be at least 1".to_string(),
            ));
        }
        if self.palette.is_empty() {
            return Err(WallError::InvalidConfig(
                "palette needs at least one color and one font".to_string(),
            ));
        }
        if self.fallback.background_color.is_empty() || self.fallback.font_family.is_empty() {
            return Err(WallError::InvalidConfig(
                "fallback style fields must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}
