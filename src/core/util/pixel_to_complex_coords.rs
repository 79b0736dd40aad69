use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

// The divisor is the full width, so the last column stops one step short of
// the far edge.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    let real = complex_rect.top_left().real
        + (f64::from(pixel_position.x) / f64::from(pixel_rect.width())) * complex_rect.width();
    let imag = complex_rect.top_left().imag
        + (f64::from(pixel_position.y) / f64::from(pixel_rect.height())) * complex_rect.height();

    Complex { real, imag }
}
