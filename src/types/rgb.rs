//! Three-channel float colour with implied full alpha.

use serde::{Deserialize, Serialize};

use super::rgba::clamp_unit;
use super::Rgba;

/// An opaque RGB colour with `f32` channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Rgb {
    r: f32,
    g: f32,
    b: f32,
}

impl Rgb {
    /// Create a colour, clamping each channel into `0.0..=1.0`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// Channels as `[r, g, b, a]` with alpha fixed at 1.0.
    pub fn rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }

    pub fn to_rgba(self) -> Rgba {
        Rgba::raw(self.r, self.g, self.b, 1.0)
    }
}

impl From<Rgb> for Rgba {
    fn from(colour: Rgb) -> Self {
        colour.to_rgba()
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(colour: Rgb) -> Self {
        [colour.r, colour.g, colour.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implied_alpha() {
        let c = Rgb::new(0.25, 0.5, 0.75);
        assert_eq!(c.rgba(), [0.25, 0.5, 0.75, 1.0]);
        assert_eq!(c.to_rgba(), Rgba::new(0.25, 0.5, 0.75, 1.0));
    }

    #[test]
    fn test_drop_alpha() {
        let c = Rgba::new(0.1, 0.2, 0.3, 0.0).to_rgb();
        assert_eq!(c, Rgb::new(0.1, 0.2, 0.3));
        assert_eq!(Rgba::from(c).alpha(), 1.0);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(Rgb::new(2.0, f32::NAN, -1.0).rgba(), [1.0, 0.0, 0.0, 1.0]);
    }
}
