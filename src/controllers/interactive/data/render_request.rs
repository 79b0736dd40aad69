use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RenderRequest {
    pub config: RenderConfig,
    pub viewport: Viewport,
}
