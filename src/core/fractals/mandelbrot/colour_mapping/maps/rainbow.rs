use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_intensity};
use crate::core::util::hsl_to_rgb::hsl_to_rgb;

const SATURATION: f64 = 1.0;
const LIGHTNESS: f64 = 0.5;

#[derive(Debug)]
pub struct MandelbrotRainbow {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotRainbow {
    fn map(&self, iterations: u32) -> Colour {
        let Some(intensity) = escape_intensity(iterations, self.max_iterations) else {
            return Colour::BLACK;
        };

        let hue = (intensity * 360.0) % 360.0;

        hsl_to_rgb(hue, SATURATION, LIGHTNESS)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotRainbow {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Rainbow
    }
}

impl MandelbrotRainbow {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
