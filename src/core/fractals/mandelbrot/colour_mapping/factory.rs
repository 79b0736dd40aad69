use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::ColourScheme,
    map::MandelbrotColourMap,
    maps::{
        fire::MandelbrotFire, ocean::MandelbrotOcean, oscilloscope::MandelbrotOscilloscope,
        rainbow::MandelbrotRainbow,
    },
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: ColourScheme,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        ColourScheme::Rainbow => Box::new(MandelbrotRainbow::new(max_iterations)),
        ColourScheme::Fire => Box::new(MandelbrotFire::new(max_iterations)),
        ColourScheme::Ocean => Box::new(MandelbrotOcean::new(max_iterations)),
        ColourScheme::Oscilloscope => Box::new(MandelbrotOscilloscope::new(max_iterations)),
    }
}
