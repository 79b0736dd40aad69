use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, escape_intensity, scaled_channel,
};

const GREEN_FACTOR: f64 = 0.3;

#[derive(Debug)]
pub struct MandelbrotOcean {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotOcean {
    fn map(&self, iterations: u32) -> Colour {
        let Some(intensity) = escape_intensity(iterations, self.max_iterations) else {
            return Colour::BLACK;
        };

        Colour {
            r: 0,
            g: scaled_channel(intensity, GREEN_FACTOR),
            b: scaled_channel(intensity, 1.0),
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotOcean {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Ocean
    }
}

impl MandelbrotOcean {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
