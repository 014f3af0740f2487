//! Photo-editing blend modes.
//!
//! All modes work on the colour channels and keep `self`'s alpha. Pair them
//! with [`Rgba::alpha_adjusted_blend`] to weight the result by the top
//! layer's alpha.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

use super::Rgba;

fn overlow(a: f32, b: f32) -> f32 {
    2.0 * a * b
}

fn overhi(a: f32, b: f32) -> f32 {
    1.0 - 2.0 * (1.0 - a) * (1.0 - b)
}

fn soft(a: f32, b: f32) -> f32 {
    (1.0 - 2.0 * b) * (a * a) + 2.0 * b * a
}

impl Rgba {
    fn per_channel(self, other: Self, f: fn(f32, f32) -> f32) -> Self {
        Self::raw(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            self.a,
        )
        .clamp_color()
    }

    /// `1 - (1 - a)(1 - b)`: always at least as light as either input.
    pub fn screen(self, other: Self) -> Self {
        self.invert().multiply(other.invert()).invert()
    }

    /// `a / (1 - b)`.
    pub fn dodge(self, other: Self) -> Self {
        self.divide(other.invert())
    }

    /// `1 - (1 - a) / b`.
    pub fn burn(self, other: Self) -> Self {
        self.invert().divide(other).invert()
    }

    /// Multiply-or-screen chosen by `self`'s luma.
    pub fn overlay(self, other: Self) -> Self {
        if self.luma() < 0.5 {
            self.per_channel(other, overlow)
        } else {
            self.per_channel(other, overhi)
        }
    }

    /// Multiply-or-screen chosen by `other`'s luma.
    pub fn hard_light(self, other: Self) -> Self {
        if other.luma() < 0.5 {
            self.per_channel(other, overlow)
        } else {
            self.per_channel(other, overhi)
        }
    }

    /// `(1 - 2b)a² + 2ba`.
    pub fn soft_light(self, other: Self) -> Self {
        self.per_channel(other, soft)
    }

    /// Burn for dark `other`, dodge for light `other`.
    pub fn vivid_light(self, other: Self) -> Self {
        if other.luma() < 0.5 {
            self.burn(other)
        } else {
            self.dodge(other)
        }
    }
}

/// A named two-colour operation, for callers that pick the mode at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    Add,
    Subtract,
    Multiply,
    Divide,
    Screen,
    Dodge,
    Burn,
    Overlay,
    HardLight,
    SoftLight,
    VividLight,
    LightestLuma,
    DarkestLuma,
    LightestComponent,
    DarkestComponent,
    Largest,
    Smallest,
}

impl BlendMode {
    pub const ALL: [BlendMode; 17] = [
        BlendMode::Add,
        BlendMode::Subtract,
        BlendMode::Multiply,
        BlendMode::Divide,
        BlendMode::Screen,
        BlendMode::Dodge,
        BlendMode::Burn,
        BlendMode::Overlay,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::VividLight,
        BlendMode::LightestLuma,
        BlendMode::DarkestLuma,
        BlendMode::LightestComponent,
        BlendMode::DarkestComponent,
        BlendMode::Largest,
        BlendMode::Smallest,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Add => "add",
            BlendMode::Subtract => "subtract",
            BlendMode::Multiply => "multiply",
            BlendMode::Divide => "divide",
            BlendMode::Screen => "screen",
            BlendMode::Dodge => "dodge",
            BlendMode::Burn => "burn",
            BlendMode::Overlay => "overlay",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::VividLight => "vivid-light",
            BlendMode::LightestLuma => "lightest-luma",
            BlendMode::DarkestLuma => "darkest-luma",
            BlendMode::LightestComponent => "lightest-component",
            BlendMode::DarkestComponent => "darkest-component",
            BlendMode::Largest => "largest",
            BlendMode::Smallest => "smallest",
        }
    }

    /// Combine `base` (bottom) with `other` (top).
    pub fn apply(self, base: Rgba, other: Rgba) -> Rgba {
        match self {
            BlendMode::Add => base.add(other),
            BlendMode::Subtract => base.subtract(other),
            BlendMode::Multiply => base.multiply(other),
            BlendMode::Divide => base.divide(other),
            BlendMode::Screen => base.screen(other),
            BlendMode::Dodge => base.dodge(other),
            BlendMode::Burn => base.burn(other),
            BlendMode::Overlay => base.overlay(other),
            BlendMode::HardLight => base.hard_light(other),
            BlendMode::SoftLight => base.soft_light(other),
            BlendMode::VividLight => base.vivid_light(other),
            BlendMode::LightestLuma => base.lightest_luma(other),
            BlendMode::DarkestLuma => base.darkest_luma(other),
            BlendMode::LightestComponent => base.lightest_component(other),
            BlendMode::DarkestComponent => base.darkest_component(other),
            BlendMode::Largest => base.largest_component(other),
            BlendMode::Smallest => base.smallest_component(other),
        }
    }

    /// Apply the mode, then mix the result into `base` by `other`'s alpha.
    pub fn apply_alpha_weighted(self, base: Rgba, other: Rgba) -> Rgba {
        base.alpha_adjusted_blend(other, |top| self.apply(base, top))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| ColorError::Parse {
                message: format!("Unknown blend mode: {}", s),
                help: Some(format!(
                    "Available modes: {}",
                    BlendMode::ALL.map(BlendMode::name).join(", ")
                )),
            })
    }
}
