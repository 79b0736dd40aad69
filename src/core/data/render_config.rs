use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub colour_scheme: ColourScheme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_scheme: ColourScheme::default(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pixel_rect().map(|_| ())
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, ConfigError> {
        let pixel_rect = PixelRect::new(self.width, self.height)?;

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(pixel_rect)
    }
}
