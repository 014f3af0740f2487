//! Conversions to and from the `palette` crate's sRGB types.

use palette::{Srgb, Srgba};

use super::{Rgb, Rgba};

impl From<Srgba<f32>> for Rgba {
    fn from(c: Srgba<f32>) -> Self {
        Rgba::new(c.color.red, c.color.green, c.color.blue, c.alpha)
    }
}

impl From<Rgba> for Srgba<f32> {
    fn from(c: Rgba) -> Self {
        Srgba::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Srgb<f32>> for Rgb {
    fn from(c: Srgb<f32>) -> Self {
        Rgb::new(c.red, c.green, c.blue)
    }
}

impl From<Rgb> for Srgb<f32> {
    fn from(c: Rgb) -> Self {
        let [r, g, b, _] = c.rgba();
        Srgb::new(r, g, b)
    }
}
