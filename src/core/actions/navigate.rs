use crate::core::actions::render::errors::RenderError;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::render_config::{ConfigError, RenderConfig};
use crate::core::data::viewport::Viewport;

pub const ZOOM_IN_FACTOR: f64 = 2.0;

#[must_use]
pub fn default_viewport() -> Viewport {
    Viewport::default()
}

#[must_use]
pub fn default_config() -> RenderConfig {
    RenderConfig::default()
}

#[must_use]
pub fn reset() -> (Viewport, RenderConfig) {
    (default_viewport(), default_config())
}

/// Recentres `viewport` on the clicked pixel of a `width` x `height` image and
/// zooms in by [`ZOOM_IN_FACTOR`].
///
/// Clicks past the image edge are not rejected; the new centre is
/// extrapolated along the same linear map.
pub fn map_click_to_viewport(
    click: Point,
    width: u32,
    height: u32,
    viewport: Viewport,
) -> Result<Viewport, RenderError> {
    viewport.validate().inspect_err(|err| {
        log::warn!("rejecting click on {viewport:?}: {err}");
    })?;
    PixelRect::new(width, height).map_err(ConfigError::from)?;

    let span = 2.0 * viewport.half_extent();
    let offset_x = f64::from(click.x) / f64::from(width) - 0.5;
    let offset_y = f64::from(click.y) / f64::from(height) - 0.5;

    let zoomed = Viewport::new(
        viewport.center_x + offset_x * span,
        viewport.center_y + offset_y * span,
        viewport.zoom * ZOOM_IN_FACTOR,
    )?;

    log::debug!(
        "click at ({}, {}) moves view to ({}, {}) zoom {}",
        click.x,
        click.y,
        zoomed.center_x,
        zoomed.center_y,
        zoomed.zoom
    );

    Ok(zoomed)
}
