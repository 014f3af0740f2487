//! Packed integer colour tiers.
//!
//! Each tier stores RGBA at a fixed precision. Packed tiers lay channels out
//! red-first from the most significant bits down to alpha in the least
//! significant bits, defined on the integer value (not on memory byte order):
//!
//! | Tier | Storage | Bits/channel | Alpha |
//! |------|---------|--------------|-------|
//! | [`Color64`] | `u64` | 16 | stored |
//! | [`Color48`] | `[u16; 3]` | 16 | implied 65535 |
//! | [`Color32`] | `u32` | 8 | stored |
//! | [`Color24`] | `[u8; 3]` | 8 | implied 255 |
//! | [`Color16`] | `u16` | 4 | stored |
//! | [`Color8`] | `u8` | 2 | stored |
//!
//! All conversions go through [`Rgba`]. Quantization rounds to the nearest
//! step and clamps, so only floats that are exact multiples of `1 / MAX`
//! survive a float -> packed -> float round trip unchanged.

use serde::{Deserialize, Serialize};

use super::rgba::clamp_unit;
use super::Rgba;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// Native channel type of a tier (`u8` or `u16`).
pub trait Channel: Copy + Into<u32> + sealed::Sealed {
    /// Narrow from `u32`. Callers keep `v` within the tier's range.
    fn from_u32(v: u32) -> Self;
}

impl Channel for u8 {
    fn from_u32(v: u32) -> Self {
        v as u8
    }
}

impl Channel for u16 {
    fn from_u32(v: u32) -> Self {
        v as u16
    }
}

/// A fixed-precision colour encoding that converts through [`Rgba`].
pub trait PackedColor: Copy {
    /// Native per-channel integer type.
    type Channel: Channel;

    /// Bits per channel.
    const BITS: u32;

    /// Largest channel value.
    const MAX: u32 = (1 << Self::BITS) - 1;

    /// Number of distinct opaque colours the tier can express.
    const SPECTRUM: u64 = (Self::MAX as u64 + 1).pow(3);

    /// Whether alpha is stored. Alpha-less tiers report `MAX` for alpha.
    const HAS_ALPHA: bool;

    /// Pack native channels. Alpha-less tiers ignore `a`.
    fn from_rgba(rgba: [Self::Channel; 4]) -> Self;

    /// Extract native channels as `[r, g, b, a]`.
    fn rgba(self) -> [Self::Channel; 4];

    /// Widen to the canonical float colour.
    fn to_float(self) -> Rgba {
        let max = Self::MAX as f32;
        let [r, g, b, a] = self
            .rgba()
            .map(|c| clamp_unit(Into::<u32>::into(c) as f32 / max));
        Rgba::raw(r, g, b, a)
    }

    /// Quantize a float colour, rounding to the nearest step.
    fn from_float(colour: Rgba) -> Self {
        Self::from_rgba(colour.rgba().map(quantize::<Self>))
    }
}

fn quantize<P: PackedColor>(v: f32) -> P::Channel {
    let max = P::MAX as f32;
    let scaled = (v * max).round();
    let clamped = if scaled.is_nan() { 0.0 } else { scaled.clamp(0.0, max) };
    <P::Channel as Channel>::from_u32(clamped as u32)
}

macro_rules! packed_tier {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $channel:ty, $bits:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            /// Wrap a raw packed value.
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            /// The raw packed value.
            pub const fn bits(self) -> $repr {
                self.0
            }
        }

        impl PackedColor for $name {
            type Channel = $channel;
            const BITS: u32 = $bits;
            const HAS_ALPHA: bool = true;

            fn from_rgba([r, g, b, a]: [$channel; 4]) -> Self {
                let mask = Self::MAX as $repr;
                let lane = |v: $channel, slot: u32| (<$repr>::from(v) & mask) << (slot * Self::BITS);
                Self(lane(r, 3) | lane(g, 2) | lane(b, 1) | lane(a, 0))
            }

            fn rgba(self) -> [$channel; 4] {
                let mask = Self::MAX as $repr;
                let lane = |slot: u32| ((self.0 >> (slot * Self::BITS)) & mask) as $channel;
                [lane(3), lane(2), lane(1), lane(0)]
            }
        }

        impl From<$name> for Rgba {
            fn from(colour: $name) -> Self {
                colour.to_float()
            }
        }

        impl From<Rgba> for $name {
            fn from(colour: Rgba) -> Self {
                Self::from_float(colour)
            }
        }
    };
}

packed_tier!(
    /// 16 bits per channel packed into a `u64`.
    Color64, u64, u16, 16
);

packed_tier!(
    /// 8 bits per channel packed into a `u32`.
    ///
    /// ```
    /// use colorkit::{Color32, PackedColor};
    ///
    /// let c = Color32::from_rgba([255, 128, 0, 255]);
    /// assert_eq!(c.bits(), 0xFF8000FF);
    /// ```
    Color32, u32, u8, 8
);

packed_tier!(
    /// 4 bits per channel packed into a `u16`.
    Color16, u16, u8, 4
);

packed_tier!(
    /// 2 bits per channel packed into a `u8`.
    Color8, u8, u8, 2
);

impl Color64 {
    /// Drop alpha.
    pub fn to_color48(self) -> Color48 {
        let [r, g, b, _] = self.rgba();
        Color48::new(r, g, b)
    }
}

impl Color32 {
    /// Drop alpha.
    pub fn to_color24(self) -> Color24 {
        let [r, g, b, _] = self.rgba();
        Color24::new(r, g, b)
    }
}

/// 16 bits per channel, no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color48([u16; 3]);

impl Color48 {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self([r, g, b])
    }

    pub const fn channels(self) -> [u16; 3] {
        self.0
    }

    /// Widen to [`Color64`] with full alpha.
    pub fn to_color64(self) -> Color64 {
        let [r, g, b] = self.0;
        Color64::from_rgba([r, g, b, u16::MAX])
    }
}

impl PackedColor for Color48 {
    type Channel = u16;
    const BITS: u32 = 16;
    const HAS_ALPHA: bool = false;

    fn from_rgba([r, g, b, _]: [u16; 4]) -> Self {
        Self::new(r, g, b)
    }

    fn rgba(self) -> [u16; 4] {
        let [r, g, b] = self.0;
        [r, g, b, u16::MAX]
    }
}

/// 8 bits per channel, no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color24([u8; 3]);

impl Color24 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub const fn channels(self) -> [u8; 3] {
        self.0
    }

    /// Widen to [`Color32`] with full alpha.
    pub fn to_color32(self) -> Color32 {
        let [r, g, b] = self.0;
        Color32::from_rgba([r, g, b, u8::MAX])
    }
}

impl PackedColor for Color24 {
    type Channel = u8;
    const BITS: u32 = 8;
    const HAS_ALPHA: bool = false;

    fn from_rgba([r, g, b, _]: [u8; 4]) -> Self {
        Self::new(r, g, b)
    }

    fn rgba(self) -> [u8; 4] {
        let [r, g, b] = self.0;
        [r, g, b, u8::MAX]
    }
}

impl From<Color48> for Rgba {
    fn from(colour: Color48) -> Self {
        colour.to_float()
    }
}

impl From<Color24> for Rgba {
    fn from(colour: Color24) -> Self {
        colour.to_float()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_constants() {
        assert_eq!(Color64::MAX, 65535);
        assert_eq!(Color48::MAX, 65535);
        assert_eq!(Color32::MAX, 255);
        assert_eq!(Color24::MAX, 255);
        assert_eq!(Color16::MAX, 15);
        assert_eq!(Color8::MAX, 3);
        assert_eq!(Color32::SPECTRUM, 16_777_216);
        assert_eq!(Color8::SPECTRUM, 64);
    }

    #[test]
    fn test_color32_layout() {
        let c = Color32::from_rgba([255, 128, 0, 255]);
        assert_eq!(c.bits(), 0xFF80_00FF);
        assert_eq!(c.rgba(), [255, 128, 0, 255]);
    }

    #[test]
    fn test_color64_layout() {
        let c = Color64::from_rgba([0x1234, 0x5678, 0x9ABC, 0xDEF0]);
        assert_eq!(c.bits(), 0x1234_5678_9ABC_DEF0);
        assert_eq!(c.rgba(), [0x1234, 0x5678, 0x9ABC, 0xDEF0]);
    }

    #[test]
    fn test_color16_layout() {
        let c = Color16::from_rgba([0xA, 0xB, 0xC, 0xD]);
        assert_eq!(c.bits(), 0xABCD);
        assert_eq!(Color16::from_bits(0x1234).rgba(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_color8_layout() {
        let c = Color8::from_rgba([3, 2, 1, 0]);
        assert_eq!(c.bits(), 0b11_10_01_00);
        assert_eq!(Color8::from_bits(0b01_10_11_00).rgba(), [1, 2, 3, 0]);
    }

    #[test]
    fn test_out_of_range_channels_are_masked() {
        let c = Color16::from_rgba([0x1F, 0, 0, 0]);
        assert_eq!(c.rgba(), [0xF, 0, 0, 0]);
    }

    #[test]
    fn test_from_float_rounds_to_nearest() {
        let c = Color32::from_float(Rgba::new(0.5, 1.0 / 255.0 * 0.4, 1.0, 0.0));
        // 127.5 rounds up, 0.4 rounds down
        assert_eq!(c.rgba(), [128, 0, 255, 0]);

        let c = Color8::from_float(Rgba::new(0.5, 0.1, 0.9, 1.0));
        // 1.5 -> 2, 0.3 -> 0, 2.7 -> 3
        assert_eq!(c.rgba(), [2, 0, 3, 3]);
    }

    #[test]
    fn test_to_float_divides_by_max() {
        let c = Color16::from_rgba([15, 0, 5, 15]).to_float();
        assert_eq!(c.rgba(), [1.0, 0.0, 5.0 / 15.0, 1.0]);

        let c = Color8::from_rgba([3, 1, 0, 3]).to_float();
        assert_eq!(c.rgba(), [1.0, 1.0 / 3.0, 0.0, 1.0]);
    }

    #[test]
    fn test_wide_narrow_siblings() {
        let c64 = Color64::from_rgba([1, 2, 3, 4]);
        assert_eq!(c64.to_color48(), Color48::new(1, 2, 3));
        assert_eq!(Color48::new(1, 2, 3).to_color64().rgba(), [1, 2, 3, 65535]);

        let c32 = Color32::from_bits(0x1020_3040);
        assert_eq!(c32.to_color24(), Color24::new(0x10, 0x20, 0x30));
        assert_eq!(Color24::new(0x10, 0x20, 0x30).to_color32().bits(), 0x1020_30FF);
    }

    #[test]
    fn test_alpha_less_tiers_are_opaque() {
        assert_eq!(Color24::new(0, 0, 0).to_float(), Rgba::BLACK);
        assert_eq!(Color48::new(65535, 65535, 65535).to_float(), Rgba::WHITE);
        assert!(!Color24::HAS_ALPHA);
        assert!(Color32::HAS_ALPHA);
    }

    #[test]
    fn test_exact_round_trip_on_grid() {
        for v in 0..=15u8 {
            let c = Color16::from_rgba([v, 15 - v, v, 15]);
            assert_eq!(Color16::from_float(c.to_float()), c);
        }
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Color32::from_bits(0xFF8000FF)).unwrap();
        assert_eq!(json, "4286578943");

        let c: Color24 = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(c, Color24::new(1, 2, 3));
    }
}
