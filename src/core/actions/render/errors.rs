use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::render_config::ConfigError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithmError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid viewport: {0}")]
    InvalidViewport(#[from] ViewportError),
    #[error("invalid render config: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

impl From<MandelbrotAlgorithmError> for RenderError {
    fn from(err: MandelbrotAlgorithmError) -> Self {
        match err {
            MandelbrotAlgorithmError::Viewport(err) => Self::InvalidViewport(err),
            MandelbrotAlgorithmError::Config(err) => Self::InvalidConfig(err),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(err) => Self::Cancelled(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

impl RenderError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
