use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::progress::{ProgressTracker, SharedProgressTracker};
use crate::core::actions::render::errors::RenderError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;

/// Renders `viewport` at the size, iteration cap and colour scheme of
/// `config`.
///
/// Pixels are computed row by row, top to bottom. `on_progress` receives the
/// completed percentage after every 1000 pixels and a final `100`. Both
/// inputs are validated before any pixel work, so an invalid request never
/// reports progress.
pub fn render<F>(
    config: RenderConfig,
    viewport: Viewport,
    on_progress: F,
) -> Result<PixelBuffer, RenderError>
where
    F: FnMut(u8),
{
    render_cancelable(config, viewport, &NeverCancel, on_progress)
}

pub fn render_cancelable<C, F>(
    config: RenderConfig,
    viewport: Viewport,
    cancel: &C,
    on_progress: F,
) -> Result<PixelBuffer, RenderError>
where
    C: CancelToken,
    F: FnMut(u8),
{
    let start = Instant::now();
    let algorithm = prepare(&config, &viewport)?;
    let pixel_rect = algorithm.pixel_rect();

    let mut progress = ProgressTracker::new(pixel_rect.size(), on_progress);
    let iterations = generate_fractal(&algorithm, cancel, &mut progress)?;

    let colour_map = mandelbrot_colour_map_factory(config.colour_scheme, config.max_iterations);
    let pixel_buffer = generate_pixel_buffer(iterations, &colour_map, pixel_rect, cancel)?;
    progress.finish();

    log::debug!(
        "rendered {}x{} ({} iterations, {}) in {:?}",
        config.width,
        config.height,
        config.max_iterations,
        config.colour_scheme,
        start.elapsed()
    );

    Ok(pixel_buffer)
}

pub fn render_parallel<F>(
    config: RenderConfig,
    viewport: Viewport,
    on_progress: F,
) -> Result<PixelBuffer, RenderError>
where
    F: Fn(u8) + Sync,
{
    render_parallel_cancelable(config, viewport, &NeverCancel, on_progress)
}

pub fn render_parallel_cancelable<C, F>(
    config: RenderConfig,
    viewport: Viewport,
    cancel: &C,
    on_progress: F,
) -> Result<PixelBuffer, RenderError>
where
    C: CancelToken,
    F: Fn(u8) + Sync,
{
    let start = Instant::now();
    let algorithm = prepare(&config, &viewport)?;
    let pixel_rect = algorithm.pixel_rect();

    let progress = SharedProgressTracker::new(pixel_rect.size(), on_progress);
    let iterations = generate_fractal_parallel_rayon(&algorithm, cancel, &progress)?;

    let colour_map = mandelbrot_colour_map_factory(config.colour_scheme, config.max_iterations);
    let pixel_buffer = generate_pixel_buffer(iterations, &colour_map, pixel_rect, cancel)?;
    progress.finish();

    log::debug!(
        "rendered {}x{} ({} iterations, {}) on {} threads in {:?}",
        config.width,
        config.height,
        config.max_iterations,
        config.colour_scheme,
        rayon::current_num_threads(),
        start.elapsed()
    );

    Ok(pixel_buffer)
}

fn prepare(config: &RenderConfig, viewport: &Viewport) -> Result<MandelbrotAlgorithm, RenderError> {
    MandelbrotAlgorithm::new(config, viewport).map_err(|err| {
        log::warn!("rejecting render of {viewport:?} with {config:?}: {err}");
        RenderError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::Cancelled;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::render_config::ConfigError;
    use crate::core::data::viewport::ViewportError;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
    use std::cell::RefCell;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn config(width: u32, height: u32, max_iterations: u32, scheme: ColourScheme) -> RenderConfig {
        RenderConfig {
            width,
            height,
            max_iterations,
            colour_scheme: scheme,
        }
    }

    #[test]
    fn test_small_oscilloscope_render_has_black_interior_and_finishes() {
        let reports = RefCell::new(Vec::new());

        let buffer = render(
            config(4, 4, 50, ColourScheme::Oscilloscope),
            Viewport::default(),
            |p| reports.borrow_mut().push(p),
        )
        .unwrap();

        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.buffer().len(), 4 * 4 * 3);
        // (2, 2) samples c = -0.5 + 0i
        assert_eq!(buffer.pixel(Point { x: 2, y: 2 }), Some(Colour::BLACK));
        assert_eq!(reports.into_inner().last(), Some(&100));
    }

    #[test]
    fn test_corner_pixel_escapes_immediately() {
        let buffer = render(
            config(4, 4, 50, ColourScheme::Oscilloscope),
            Viewport::default(),
            |_| {},
        )
        .unwrap();

        // c = -2.5 - 2i escapes on the first update
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
        // c = -1.5 - 1i escapes at index 1 -> floor(255 * 1/50)
        assert_eq!(
            buffer.pixel(Point { x: 1, y: 1 }),
            Some(Colour { r: 0, g: 5, b: 0 })
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = config(64, 48, 100, ColourScheme::Rainbow);
        let viewport = Viewport::new(-0.75, 0.1, 4.0).unwrap();

        let first = render(config, viewport, |_| {}).unwrap();
        let second = render(config, viewport, |_| {}).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_progress_every_thousand_pixels_then_complete() {
        let reports = RefCell::new(Vec::new());

        render(
            config(50, 50, 20, ColourScheme::Fire),
            Viewport::default(),
            |p| reports.borrow_mut().push(p),
        )
        .unwrap();

        assert_eq!(reports.into_inner(), vec![40, 80, 100]);
    }

    #[test]
    fn test_invalid_viewport_rejected_before_progress() {
        let reports = RefCell::new(Vec::new());
        let viewport = Viewport {
            center_x: -0.5,
            center_y: 0.0,
            zoom: 0.0,
        };

        let result = render(config(4, 4, 50, ColourScheme::Fire), viewport, |p| {
            reports.borrow_mut().push(p)
        });

        assert_eq!(
            result,
            Err(RenderError::InvalidViewport(ViewportError::InvalidZoom {
                zoom: 0.0
            }))
        );
        assert!(reports.into_inner().is_empty());
    }

    #[test]
    fn test_infinite_zoom_rejected_before_progress() {
        let reports = RefCell::new(Vec::new());
        let viewport = Viewport {
            zoom: f64::INFINITY,
            ..Viewport::default()
        };

        let result = render(config(2, 2, 50, ColourScheme::Fire), viewport, |p| {
            reports.borrow_mut().push(p)
        });

        assert_eq!(
            result,
            Err(RenderError::InvalidViewport(ViewportError::InvalidZoom {
                zoom: f64::INFINITY
            }))
        );
        assert!(reports.into_inner().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_before_progress() {
        let reports = RefCell::new(Vec::new());

        let zero_width = render(
            config(0, 4, 50, ColourScheme::Fire),
            Viewport::default(),
            |p| reports.borrow_mut().push(p),
        );
        let zero_iterations = render(
            config(4, 4, 0, ColourScheme::Fire),
            Viewport::default(),
            |p| reports.borrow_mut().push(p),
        );

        assert!(matches!(zero_width, Err(RenderError::InvalidConfig(_))));
        assert_eq!(
            zero_iterations,
            Err(RenderError::InvalidConfig(ConfigError::ZeroMaxIterations))
        );
        assert!(reports.into_inner().is_empty());
    }

    #[test]
    fn test_unknown_scheme_renders_as_oscilloscope() {
        let fallback = config(16, 16, 30, ColourScheme::from_name("sepia"));
        let oscilloscope = config(16, 16, 30, ColourScheme::Oscilloscope);

        assert_eq!(
            render(fallback, Viewport::default(), |_| {}),
            render(oscilloscope, Viewport::default(), |_| {})
        );
    }

    #[test]
    fn test_cancelled_render_never_completes() {
        let reports = RefCell::new(Vec::new());
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = render_cancelable(
            config(32, 32, 50, ColourScheme::Ocean),
            Viewport::default(),
            &cancel_token,
            |p| reports.borrow_mut().push(p),
        );

        assert_eq!(result, Err(RenderError::Cancelled(Cancelled)));
        assert!(!reports.into_inner().contains(&100));
    }

    #[test]
    fn test_parallel_matches_serial_for_every_scheme() {
        let viewport = Viewport::new(-0.7435, 0.1314, 50.0).unwrap();

        for &scheme in ColourScheme::ALL {
            let config = config(97, 61, 200, scheme);

            let serial = render(config, viewport, |_| {}).unwrap();
            let parallel = render_parallel(config, viewport, |_| {}).unwrap();

            assert_eq!(serial, parallel, "{scheme}");
        }
    }

    #[test]
    fn test_parallel_progress_is_monotonic_and_complete() {
        let reports = Mutex::new(Vec::new());

        render_parallel(
            config(120, 90, 50, ColourScheme::Rainbow),
            Viewport::default(),
            |p| reports.lock().unwrap().push(p),
        )
        .unwrap();

        let reports = reports.into_inner().unwrap();
        assert!(reports.windows(2).all(|w| w[0] < w[1]), "{reports:?}");
        assert_eq!(reports.last(), Some(&100));
    }

    #[test]
    fn test_parallel_cancel_after_start() {
        let polls = AtomicUsize::new(0);
        let cancel_token = || polls.fetch_add(1, Ordering::Relaxed) >= 3;

        let result = render_parallel_cancelable(
            config(64, 64, 50, ColourScheme::Rainbow),
            Viewport::default(),
            &cancel_token,
            |_| {},
        );

        assert!(result.is_err_and(|err| err.is_cancelled()));
    }
}
