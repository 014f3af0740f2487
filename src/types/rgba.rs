//! Canonical floating-point RGBA colour.
//!
//! Every other colour type converts to and from [`Rgba`]. All channels are
//! kept in `0.0..=1.0`: constructors clamp, and every operation that could
//! leave the range clamps its result before returning.

use serde::{Deserialize, Serialize};

use super::packed::{Color16, Color24, Color32, Color48, Color64, Color8, PackedColor};
use super::rgb::Rgb;

/// BT.709 luma weight for red.
pub const LUMA_R: f32 = 0.2126;
/// BT.709 luma weight for green.
pub const LUMA_G: f32 = 0.7152;
/// BT.709 luma weight for blue.
pub const LUMA_B: f32 = 0.0722;
/// Sum of the luma weights. Always 1.0.
pub const LUMA_TOTAL: f32 = LUMA_R + LUMA_G + LUMA_B;

const _: () = assert!(LUMA_TOTAL > 0.999_999 && LUMA_TOTAL < 1.000_001);

/// Probe step used to measure how a channel mix moves luma in `lighten`.
const LUMA_PROBE: f32 = 0.0001;

/// Clamp a float channel into `0.0..=1.0`.
///
/// NaN maps to 0.0. `f32::clamp` passes NaN through, so it is checked first.
#[inline]
pub(crate) fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, ratio: f32) -> f32 {
    a + (b - a) * ratio
}

/// An RGBA colour with `f32` channels in `0.0..=1.0`.
///
/// Values are immutable; every operation returns a new colour.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rgba {
    pub(crate) r: f32,
    pub(crate) g: f32,
    pub(crate) b: f32,
    pub(crate) a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::raw(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::raw(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::raw(1.0, 1.0, 1.0, 1.0);

    /// Create a colour from RGBA components, clamping each into `0.0..=1.0`.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::raw(r, g, b, a).clamp()
    }

    /// Create an opaque colour from RGB components.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build without clamping. Callers clamp before handing the value out.
    pub(crate) const fn raw(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn red(self) -> f32 {
        self.r
    }

    pub fn green(self) -> f32 {
        self.g
    }

    pub fn blue(self) -> f32 {
        self.b
    }

    pub fn alpha(self) -> f32 {
        self.a
    }

    /// All four channels as `[r, g, b, a]`.
    pub fn rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn with_red(self, red: f32) -> Self {
        Self::new(red, self.g, self.b, self.a)
    }

    pub fn with_green(self, green: f32) -> Self {
        Self::new(self.r, green, self.b, self.a)
    }

    pub fn with_blue(self, blue: f32) -> Self {
        Self::new(self.r, self.g, blue, self.a)
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// Clamp all four channels into `0.0..=1.0`.
    pub fn clamp(self) -> Self {
        Self::raw(
            clamp_unit(self.r),
            clamp_unit(self.g),
            clamp_unit(self.b),
            clamp_unit(self.a),
        )
    }

    /// Clamp the colour channels only; alpha is returned as-is.
    pub fn clamp_color(self) -> Self {
        Self::raw(
            clamp_unit(self.r),
            clamp_unit(self.g),
            clamp_unit(self.b),
            self.a,
        )
    }

    /// Perceptual luminance using the BT.709 weights.
    pub fn luma(self) -> f32 {
        self.r * LUMA_R + self.g * LUMA_G + self.b * LUMA_B
    }

    /// Raise luma by `amount` while keeping the ratio between channels.
    ///
    /// The delta for each channel is proportional to that channel's share of
    /// `r + g + b`, scaled so the resulting luma change equals `amount`.
    ///
    /// Negative amounts darken. Results at or past the ends of the luma range
    /// become white or black with alpha preserved. A colour whose channels are
    /// all zero has no ratio to keep and stays black.
    pub fn lighten(self, amount: f32) -> Self {
        if amount == 0.0 {
            return self;
        }

        let target = self.luma() + amount;
        if target >= 1.0 {
            return Self::raw(1.0, 1.0, 1.0, self.a);
        }
        if target <= 0.0 {
            return Self::raw(0.0, 0.0, 0.0, self.a);
        }

        let total = self.r + self.g + self.b;
        if total == 0.0 {
            return Self::raw(0.0, 0.0, 0.0, self.a);
        }

        let probe_r = LUMA_PROBE * (self.r / total);
        let probe_g = LUMA_PROBE * (self.g / total);
        let probe_b = LUMA_PROBE * (self.b / total);
        let probe_luma = probe_r * LUMA_R + probe_g * LUMA_G + probe_b * LUMA_B;
        let scale = amount / probe_luma;

        Self::raw(
            self.r + probe_r * scale,
            self.g + probe_g * scale,
            self.b + probe_b * scale,
            self.a,
        )
        .clamp_color()
    }

    /// Lower luma by `amount`. Equivalent to `lighten(-amount)`.
    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    /// Lighten by the luma of `other`.
    pub fn illuminate(self, other: Self) -> Self {
        self.lighten(other.luma())
    }

    /// Darken by the luma of `other`.
    pub fn deluminate(self, other: Self) -> Self {
        self.lighten(-other.luma())
    }

    pub fn add(self, other: Self) -> Self {
        Self::raw(self.r + other.r, self.g + other.g, self.b + other.b, self.a).clamp_color()
    }

    pub fn subtract(self, other: Self) -> Self {
        Self::raw(self.r - other.r, self.g - other.g, self.b - other.b, self.a).clamp_color()
    }

    pub fn multiply(self, other: Self) -> Self {
        Self::raw(self.r * other.r, self.g * other.g, self.b * other.b, self.a).clamp_color()
    }

    /// Divide colour channels by `other`'s.
    ///
    /// Dividing by a zero channel yields 1.0 for a non-zero numerator
    /// (infinity clamps to the top of the range) and 0.0 for `0 / 0`
    /// (NaN clamps to the bottom).
    pub fn divide(self, other: Self) -> Self {
        Self::raw(self.r / other.r, self.g / other.g, self.b / other.b, self.a).clamp_color()
    }

    /// Multiply alpha by `other`'s alpha.
    pub fn dilute(self, other: Self) -> Self {
        Self::raw(self.r, self.g, self.b, clamp_unit(self.a * other.a))
    }

    /// Add `other`'s alpha to this alpha.
    pub fn condense(self, other: Self) -> Self {
        Self::raw(self.r, self.g, self.b, clamp_unit(self.a + other.a))
    }

    /// Linear interpolation of the colour channels towards `other`.
    ///
    /// `ratio` 0.0 gives `self`, 1.0 gives `other`. Alpha comes from `self`.
    pub fn blend(self, ratio: f32, other: Self) -> Self {
        Self::raw(
            lerp(self.r, other.r, ratio),
            lerp(self.g, other.g, ratio),
            lerp(self.b, other.b, ratio),
            self.a,
        )
        .clamp_color()
    }

    /// Like [`Rgba::blend`], but alpha is interpolated too.
    pub fn blend_with_alpha(self, ratio: f32, other: Self) -> Self {
        Self::raw(
            lerp(self.r, other.r, ratio),
            lerp(self.g, other.g, ratio),
            lerp(self.b, other.b, ratio),
            lerp(self.a, other.a, ratio),
        )
        .clamp()
    }

    /// Apply `blend_fn` to `other`, then blend the result into `self`
    /// weighted by `other`'s alpha.
    ///
    /// ```
    /// use colorkit::Rgba;
    ///
    /// let base = Rgba::rgb(0.2, 0.4, 0.6);
    /// let half = Rgba::new(1.0, 1.0, 1.0, 0.5);
    /// let out = base.alpha_adjusted_blend(half, |top| base.screen(top));
    /// assert!(out.red() > base.red());
    /// ```
    pub fn alpha_adjusted_blend<F>(self, other: Self, blend_fn: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let after = blend_fn(other);
        self.blend(other.a, after)
    }

    /// `1 - c` for each colour channel. Alpha is kept.
    pub fn invert(self) -> Self {
        Self::raw(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a).clamp_color()
    }

    /// Whichever colour has the higher luma. Ties go to `other`.
    pub fn lightest_luma(self, other: Self) -> Self {
        if self.luma() > other.luma() {
            self
        } else {
            other
        }
    }

    /// Whichever colour has the lower luma. Ties go to `other`.
    pub fn darkest_luma(self, other: Self) -> Self {
        if self.luma() < other.luma() {
            self
        } else {
            other
        }
    }

    /// Per channel, keep whichever side contributes more luma.
    pub fn lightest_component(self, other: Self) -> Self {
        let pick = |a: f32, b: f32, weight: f32| if a * weight > b * weight { a } else { b };
        Self::raw(
            pick(self.r, other.r, LUMA_R),
            pick(self.g, other.g, LUMA_G),
            pick(self.b, other.b, LUMA_B),
            self.a,
        )
    }

    /// Per channel, keep whichever side contributes less luma.
    pub fn darkest_component(self, other: Self) -> Self {
        let pick = |a: f32, b: f32, weight: f32| if a * weight < b * weight { a } else { b };
        Self::raw(
            pick(self.r, other.r, LUMA_R),
            pick(self.g, other.g, LUMA_G),
            pick(self.b, other.b, LUMA_B),
            self.a,
        )
    }

    pub fn largest_component(self, other: Self) -> Self {
        Self::raw(
            self.r.max(other.r),
            self.g.max(other.g),
            self.b.max(other.b),
            self.a,
        )
    }

    pub fn smallest_component(self, other: Self) -> Self {
        Self::raw(
            self.r.min(other.r),
            self.g.min(other.g),
            self.b.min(other.b),
            self.a,
        )
    }

    pub fn largest_alpha(self, other: Self) -> Self {
        Self::raw(self.r, self.g, self.b, self.a.max(other.a))
    }

    pub fn smallest_alpha(self, other: Self) -> Self {
        Self::raw(self.r, self.g, self.b, self.a.min(other.a))
    }

    /// Drop alpha.
    pub fn to_rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Quantize into any packed tier.
    pub fn to_packed<P: PackedColor>(self) -> P {
        P::from_float(self)
    }

    pub fn to_color64(self) -> Color64 {
        self.to_packed()
    }

    pub fn to_color48(self) -> Color48 {
        self.to_color64().to_color48()
    }

    pub fn to_color32(self) -> Color32 {
        self.to_packed()
    }

    pub fn to_color24(self) -> Color24 {
        self.to_color32().to_color24()
    }

    pub fn to_color16(self) -> Color16 {
        self.to_packed()
    }

    pub fn to_color8(self) -> Color8 {
        self.to_packed()
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(colour: Rgba) -> Self {
        colour.rgba()
    }
}
