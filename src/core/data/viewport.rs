use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_ZOOM: f64 = 1.0;

pub const BASE_HALF_EXTENT: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom must be positive with a finite visible extent, got {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("viewport centre must be finite, got ({center_x}, {center_y})")]
    NonFiniteCenter { center_x: f64, center_y: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, zoom: f64) -> Result<Self, ViewportError> {
        let viewport = Self {
            center_x,
            center_y,
            zoom,
        };
        viewport.validate()?;

        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), ViewportError> {
        if !(self.zoom > 0.0 && self.zoom.is_finite() && self.half_extent().is_finite()) {
            return Err(ViewportError::InvalidZoom { zoom: self.zoom });
        }

        if !(self.center_x.is_finite() && self.center_y.is_finite()) {
            return Err(ViewportError::NonFiniteCenter {
                center_x: self.center_x,
                center_y: self.center_y,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn half_extent(&self) -> f64 {
        BASE_HALF_EXTENT / self.zoom
    }

    pub fn region(&self) -> Result<ComplexRect, ViewportError> {
        self.validate()?;

        let half_extent = self.half_extent();

        ComplexRect::new(
            Complex::new(self.center_x - half_extent, self.center_y - half_extent),
            Complex::new(self.center_x + half_extent, self.center_y + half_extent),
        )
        .map_err(|_| ViewportError::InvalidZoom { zoom: self.zoom })
    }
}
