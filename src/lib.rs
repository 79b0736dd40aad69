//! Escape-time rendering of the Mandelbrot set.
//!
//! [`render`] turns a [`RenderConfig`] and a [`Viewport`] into an RGB
//! [`PixelBuffer`], reporting progress as it goes. [`map_click_to_viewport`]
//! implements click-to-zoom navigation. For interactive front ends,
//! [`InteractiveController`] renders on a background thread and
//! [`FractalSession`] tracks what is on screen.

mod controllers;
mod core;

pub use controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, RenderEvent,
    RenderFailure, RenderRequest,
};
pub use controllers::session::{FractalSession, RenderRequestPort, SessionError, SessionState};

pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::navigate::{
    ZOOM_IN_FACTOR, default_config, default_viewport, map_click_to_viewport, reset,
};
pub use crate::core::actions::progress::{
    PROGRESS_COMPLETE, PROGRESS_INTERVAL_PIXELS, progress_percent,
};
pub use crate::core::actions::render::errors::RenderError;
pub use crate::core::actions::render::render::{
    render, render_cancelable, render_parallel, render_parallel_cancelable,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{BYTES_PER_PIXEL, PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_config::{ConfigError, RenderConfig};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    ESCAPE_RADIUS_SQUARED, mandelbrot_iterations,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
pub use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
