//! HSV conversion for [`Rgba`].
//!
//! Hue is in degrees (`0.0..360.0`), saturation, value and alpha in
//! `0.0..=1.0`. Every `with_*` setter converts to HSV and back, so each call
//! pays for a full round trip.

use serde::{Deserialize, Serialize};

use super::rgba::clamp_unit;
use super::Rgba;

/// A colour in hue / saturation / value form, with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsva {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    pub alpha: f32,
}

impl Hsva {
    pub const fn new(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha,
        }
    }
}

impl From<Hsva> for Rgba {
    fn from(hsva: Hsva) -> Self {
        Rgba::from_hsva(hsva.hue, hsva.saturation, hsva.value, hsva.alpha)
    }
}

impl From<Rgba> for Hsva {
    fn from(colour: Rgba) -> Self {
        colour.to_hsva()
    }
}

#[derive(Clone, Copy)]
enum Peak {
    Red,
    Green,
    Blue,
}

impl Rgba {
    /// Build a colour from HSV components plus alpha.
    ///
    /// Hue is clamped to `0.0..=360.0`, the rest to `0.0..=1.0`. Zero
    /// saturation gives a grey of the requested value.
    ///
    /// ```
    /// use colorkit::Rgba;
    ///
    /// let green = Rgba::from_hsva(120.0, 1.0, 1.0, 1.0);
    /// assert_eq!(green.to_hex(), "00FF00FF");
    /// ```
    pub fn from_hsva(h: f32, s: f32, v: f32, a: f32) -> Self {
        let h = if h.is_nan() { 0.0 } else { h.clamp(0.0, 360.0) };
        let s = clamp_unit(s);
        let v = clamp_unit(v);
        let a = clamp_unit(a);

        if s <= 0.0 {
            return Self::raw(v, v, v, a);
        }

        let chroma = v * s;
        let foundation = v - chroma;
        let sector = (h / 60.0).clamp(0.0, 6.0);
        let blend = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

        let (r, g, b) = if sector < 1.0 {
            (chroma, blend, 0.0)
        } else if sector < 2.0 {
            (blend, chroma, 0.0)
        } else if sector < 3.0 {
            (0.0, chroma, blend)
        } else if sector < 4.0 {
            (0.0, blend, chroma)
        } else if sector < 5.0 {
            (blend, 0.0, chroma)
        } else {
            (chroma, 0.0, blend)
        };

        Self::raw(r + foundation, g + foundation, b + foundation, a).clamp()
    }

    /// Convert to HSV.
    ///
    /// Ties for the smallest and largest channel resolve in red, green, blue
    /// order. Greys report hue and saturation 0; black reports value 0 as
    /// well. A colour whose channels cannot be ordered yields all zeros.
    pub fn to_hsva(self) -> Hsva {
        let [r, g, b, a] = self.rgba();

        let min = if r <= g && r <= b {
            r
        } else if g <= r && g <= b {
            g
        } else if b <= r && b <= g {
            b
        } else {
            return Hsva::default();
        };

        let (max, peak) = if r >= g && r >= b {
            (r, Peak::Red)
        } else if g >= r && g >= b {
            (g, Peak::Green)
        } else if b >= r && b >= g {
            (b, Peak::Blue)
        } else {
            return Hsva::default();
        };

        if max <= 0.0 {
            return Hsva::new(0.0, 0.0, 0.0, a);
        }

        let chroma = max - min;
        if chroma <= 0.0 {
            return Hsva::new(0.0, 0.0, max, a);
        }

        let mut sector = match peak {
            Peak::Red => (g - b) / chroma,
            Peak::Green => (b - r) / chroma + 2.0,
            Peak::Blue => (r - g) / chroma + 4.0,
        };
        if sector < 0.0 {
            sector += 6.0;
        }

        Hsva::new((sector * 60.0) % 360.0, chroma / max, max, a)
    }

    pub fn hue(self) -> f32 {
        self.to_hsva().hue
    }

    pub fn saturation(self) -> f32 {
        self.to_hsva().saturation
    }

    pub fn value(self) -> f32 {
        self.to_hsva().value
    }

    pub fn with_hue(self, hue: f32) -> Self {
        let hsva = self.to_hsva();
        Self::from_hsva(hue, hsva.saturation, hsva.value, hsva.alpha)
    }

    pub fn with_saturation(self, saturation: f32) -> Self {
        let hsva = self.to_hsva();
        Self::from_hsva(hsva.hue, saturation, hsva.value, hsva.alpha)
    }

    pub fn with_value(self, value: f32) -> Self {
        let hsva = self.to_hsva();
        Self::from_hsva(hsva.hue, hsva.saturation, value, hsva.alpha)
    }

    pub fn with_hue_saturation(self, hue: f32, saturation: f32) -> Self {
        let hsva = self.to_hsva();
        Self::from_hsva(hue, saturation, hsva.value, hsva.alpha)
    }

    pub fn with_hue_value(self, hue: f32, value: f32) -> Self {
        let hsva = self.to_hsva();
        Self::from_hsva(hue, hsva.saturation, value, hsva.alpha)
    }

    pub fn with_saturation_value(self, saturation: f32, value: f32) -> Self {
        let hsva = self.to_hsva();
        Self::from_hsva(hsva.hue, saturation, value, hsva.alpha)
    }

    /// Replace hue, saturation and value, keeping alpha.
    pub fn with_hsv(self, hue: f32, saturation: f32, value: f32) -> Self {
        Self::from_hsva(hue, saturation, value, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Rgba, b: Rgba) {
        for (x, y) in a.rgba().iter().zip(b.rgba().iter()) {
            assert!((x - y).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_primaries() {
        assert_close(Rgba::from_hsva(0.0, 1.0, 1.0, 1.0), Rgba::rgb(1.0, 0.0, 0.0));
        assert_close(Rgba::from_hsva(120.0, 1.0, 1.0, 1.0), Rgba::rgb(0.0, 1.0, 0.0));
        assert_close(Rgba::from_hsva(240.0, 1.0, 1.0, 1.0), Rgba::rgb(0.0, 0.0, 1.0));
        assert_close(Rgba::from_hsva(360.0, 1.0, 1.0, 1.0), Rgba::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_secondaries() {
        assert_close(Rgba::from_hsva(60.0, 1.0, 1.0, 1.0), Rgba::rgb(1.0, 1.0, 0.0));
        assert_close(Rgba::from_hsva(180.0, 1.0, 1.0, 1.0), Rgba::rgb(0.0, 1.0, 1.0));
        assert_close(Rgba::from_hsva(300.0, 1.0, 1.0, 1.0), Rgba::rgb(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_hsva_clamps_inputs() {
        assert_close(Rgba::from_hsva(-30.0, 2.0, 1.5, 9.0), Rgba::rgb(1.0, 0.0, 0.0));
        assert_close(Rgba::from_hsva(720.0, 1.0, 1.0, -1.0), Rgba::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        let c = Rgba::from_hsva(200.0, 0.0, 0.4, 0.5);
        assert_eq!(c.rgba(), [0.4, 0.4, 0.4, 0.5]);
    }

    #[test]
    fn test_to_hsva_grey_and_black() {
        assert_eq!(Rgba::BLACK.to_hsva(), Hsva::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(
            Rgba::new(0.5, 0.5, 0.5, 0.2).to_hsva(),
            Hsva::new(0.0, 0.0, 0.5, 0.2)
        );
    }

    #[test]
    fn test_to_hsva_unordered_channels_yield_zeros() {
        // Unreachable through the public constructors, which clamp NaN.
        let broken = Rgba::raw(f32::NAN, 0.5, 0.2, 1.0);
        assert_eq!(broken.to_hsva(), Hsva::default());
        assert_eq!(broken.to_hsva().alpha, 0.0);

        let broken = Rgba::raw(0.3, f32::NAN, 0.9, 0.5);
        assert_eq!(broken.to_hsva(), Hsva::default());
    }

    #[test]
    fn test_to_hsva_sectors() {
        let hsva = Rgba::rgb(1.0, 0.5, 0.0).to_hsva();
        assert!((hsva.hue - 30.0).abs() < 1e-4);
        assert_eq!(hsva.saturation, 1.0);
        assert_eq!(hsva.value, 1.0);

        // Red peak with blue above green wraps below zero
        let hsva = Rgba::rgb(1.0, 0.0, 0.5).to_hsva();
        assert!((hsva.hue - 330.0).abs() < 1e-4);

        let hsva = Rgba::rgb(0.0, 0.25, 0.5).to_hsva();
        assert!((hsva.hue - 210.0).abs() < 1e-4);
        assert_eq!(hsva.saturation, 1.0);
        assert_eq!(hsva.value, 0.5);
    }

    #[test]
    fn test_round_trip() {
        let colours = [
            Rgba::new(0.2, 0.4, 0.6, 1.0),
            Rgba::new(0.9, 0.1, 0.3, 0.5),
            Rgba::new(0.33, 0.8, 0.12, 0.0),
            Rgba::new(0.7, 0.7, 0.1, 1.0),
        ];
        for c in colours {
            assert_close(Rgba::from(c.to_hsva()), c);
        }
    }

    #[test]
    fn test_hsv_setters() {
        let red = Rgba::new(1.0, 0.0, 0.0, 0.5);

        assert_close(red.with_hue(120.0), Rgba::new(0.0, 1.0, 0.0, 0.5));
        assert_close(red.with_saturation(0.0), Rgba::new(1.0, 1.0, 1.0, 0.5));
        assert_close(red.with_value(0.5), Rgba::new(0.5, 0.0, 0.0, 0.5));
        assert_close(red.with_hue_saturation(240.0, 0.5), Rgba::new(0.5, 0.5, 1.0, 0.5));
        assert_close(red.with_hue_value(60.0, 0.5), Rgba::new(0.5, 0.5, 0.0, 0.5));
        assert_close(red.with_saturation_value(0.5, 0.5), Rgba::new(0.5, 0.25, 0.25, 0.5));
        assert_close(red.with_hsv(180.0, 1.0, 1.0), Rgba::new(0.0, 1.0, 1.0, 0.5));
    }

    #[test]
    fn test_hsv_accessors() {
        let c = Rgba::rgb(0.0, 0.25, 0.5);
        assert!((c.hue() - 210.0).abs() < 1e-4);
        assert_eq!(c.saturation(), 1.0);
        assert_eq!(c.value(), 0.5);
    }
}
