use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, escape_intensity, scaled_channel,
};

const GREEN_FACTOR: f64 = 0.5;

#[derive(Debug)]
pub struct MandelbrotFire {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotFire {
    fn map(&self, iterations: u32) -> Colour {
        let Some(intensity) = escape_intensity(iterations, self.max_iterations) else {
            return Colour::BLACK;
        };

        Colour {
            r: scaled_channel(intensity, 1.0),
            g: scaled_channel(intensity, GREEN_FACTOR),
            b: 0,
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFire {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Fire
    }
}

impl MandelbrotFire {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
