//! Core colour types.
//!
//! - `Rgba` - canonical float colour, hub of all conversions
//! - `Rgb` - float colour with implied full alpha
//! - `Color64` .. `Color8` - packed integer tiers
//! - `Hsva` - hue / saturation / value view of a colour
//! - `BlendMode` - runtime-selectable two-colour operations

mod blend;
mod hex;
mod hsv;
mod interop;
mod packed;
mod rgb;
mod rgba;

pub use blend::BlendMode;
pub use hex::{decode_digit, encode_digit};
pub use hsv::Hsva;
pub use packed::{Channel, Color16, Color24, Color32, Color48, Color64, Color8, PackedColor};
pub use rgb::Rgb;
pub use rgba::{Rgba, LUMA_B, LUMA_G, LUMA_R, LUMA_TOTAL};
