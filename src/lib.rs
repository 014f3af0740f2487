//! colorkit - fixed-precision RGBA colours and colour algebra
//!
//! [`Rgba`] is the canonical colour: four `f32` channels kept in `0.0..=1.0`.
//! Packed tiers ([`Color64`], [`Color48`], [`Color32`], [`Color24`],
//! [`Color16`], [`Color8`]) convert to and from it through [`PackedColor`].
//!
//! ```
//! use colorkit::{PackedColor, Rgba};
//!
//! let orange = Rgba::from_hex("FF8000FF");
//! let muted = orange.darken(0.1).blend(0.5, Rgba::from_hsva(210.0, 0.4, 0.8, 1.0));
//! let packed = muted.to_color16();
//! assert_eq!(packed.rgba()[3], 15);
//! ```
//!
//! Colour operations never fail. Out-of-range inputs are clamped, NaN
//! becomes 0, and malformed hex digits read as 0. Only the strict hex
//! parser ([`str::parse`]), swatch books and the CLI return [`ColorError`].

pub mod cli;
pub mod error;
pub mod output;
pub mod swatch;
pub mod types;

pub use error::{ColorError, Result};
pub use swatch::SwatchBook;
pub use types::{
    decode_digit, encode_digit, BlendMode, Channel, Color16, Color24, Color32, Color48, Color64,
    Color8, Hsva, PackedColor, Rgb, Rgba, LUMA_B, LUMA_G, LUMA_R, LUMA_TOTAL,
};
