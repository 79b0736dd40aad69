use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::render_config::{ConfigError, RenderConfig};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use thiserror::Error;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MandelbrotAlgorithmError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Escape time of `c` under `z -> z² + c` starting from `z = 0`.
///
/// Each step applies the update first and then tests `|z|² > 4`; the index of
/// the step whose result escapes is returned. `c = 2` therefore yields 1
/// (`z₁ = 2` sits exactly on the radius, `z₂ = 6` is outside). Points that
/// survive every step return `max_iterations`.
#[must_use]
pub fn mandelbrot_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect);

        mandelbrot_iterations(c, self.max_iterations)
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        config: &RenderConfig,
        viewport: &Viewport,
    ) -> Result<Self, MandelbrotAlgorithmError> {
        let complex_rect = viewport.region()?;
        let pixel_rect = config.pixel_rect()?;

        Ok(Self {
            pixel_rect,
            complex_rect,
            max_iterations: config.max_iterations,
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 50, 100, 1000] {
            assert_eq!(
                mandelbrot_iterations(Complex::ZERO, max_iterations),
                max_iterations
            );
        }
    }

    #[test]
    fn test_two_escapes_on_second_update() {
        // z1 = 2 gives |z|² = 4, which is not > 4; z2 = 6 escapes at index 1
        for max_iterations in [2, 3, 100] {
            assert_eq!(mandelbrot_iterations(Complex::new(2.0, 0.0), max_iterations), 1);
        }
    }

    #[test]
    fn test_two_with_single_iteration_is_treated_as_interior() {
        assert_eq!(mandelbrot_iterations(Complex::new(2.0, 0.0), 1), 1);
    }

    #[test]
    fn test_far_point_escapes_on_first_update() {
        assert_eq!(mandelbrot_iterations(Complex::new(3.0, 0.0), 100), 0);
        assert_eq!(mandelbrot_iterations(Complex::new(0.0, -2.5), 100), 0);
    }

    #[test]
    fn test_known_interior_points() {
        // main cardioid and period-2 bulb
        assert_eq!(mandelbrot_iterations(Complex::new(-0.5, 0.0), 500), 500);
        assert_eq!(mandelbrot_iterations(Complex::new(-1.0, 0.0), 500), 500);
        assert_eq!(mandelbrot_iterations(Complex::new(0.25, 0.0), 500), 500);
    }

    #[test]
    fn test_boundary_neighbourhood_escapes_slowly() {
        let iterations = mandelbrot_iterations(Complex::new(0.26, 0.0), 1000);

        assert!(iterations > 10 && iterations < 1000, "{iterations}");
    }

    #[test]
    fn test_result_never_exceeds_cap() {
        for real in [-2.0, -1.5, -0.75, 0.0, 0.3, 0.5, 1.0] {
            for imag in [-1.0, -0.1, 0.0, 0.65, 1.2] {
                assert!(mandelbrot_iterations(Complex::new(real, imag), 64) <= 64);
            }
        }
    }

    #[test]
    fn test_algorithm_maps_pixel_before_iterating() {
        let config = RenderConfig {
            width: 4,
            height: 4,
            max_iterations: 50,
            ..RenderConfig::default()
        };
        let algorithm = MandelbrotAlgorithm::new(&config, &Viewport::default()).unwrap();

        // pixel (2, 2) is exactly (-0.5, 0)
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), 50);
        // pixel (0, 0) is (-2.5, -2), far outside
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), 0);
    }

    #[test]
    fn test_algorithm_rejects_invalid_inputs() {
        let viewport = Viewport {
            zoom: -1.0,
            ..Viewport::default()
        };

        assert_eq!(
            MandelbrotAlgorithm::new(&RenderConfig::default(), &viewport),
            Err(MandelbrotAlgorithmError::Viewport(ViewportError::InvalidZoom {
                zoom: -1.0
            }))
        );

        let config = RenderConfig {
            max_iterations: 0,
            ..RenderConfig::default()
        };

        assert_eq!(
            MandelbrotAlgorithm::new(&config, &Viewport::default()),
            Err(MandelbrotAlgorithmError::Config(ConfigError::ZeroMaxIterations))
        );
    }
}
