use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;

pub trait MandelbrotColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> ColourScheme;
}

impl ColourMap<u32> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: u32) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

#[must_use]
pub fn escape_intensity(iterations: u32, max_iterations: u32) -> Option<f64> {
    if iterations >= max_iterations {
        return None;
    }

    Some(f64::from(iterations) / f64::from(max_iterations))
}

#[inline]
#[must_use]
pub fn scaled_channel(intensity: f64, factor: f64) -> u8 {
    (255.0 * intensity * factor).floor() as u8
}
