use crate::core::actions::render::errors::RenderError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("render {generation} failed: {error}")]
pub struct RenderFailure {
    pub generation: u64,
    #[source]
    pub error: RenderError,
}
