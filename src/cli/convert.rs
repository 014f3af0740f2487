//! `colorkit convert`: one colour in every encoding.

use std::fmt::Write as _;

use clap::Args;
use serde::Serialize;

use crate::error::{ColorError, Result};
use crate::types::{Hsva, PackedColor, Rgba};

use super::Context;

/// Show a colour in every encoding
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Colour as hex (F00, FF8000FF, #1a2b) or a `$swatch` name
    pub colour: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// One packed tier in a [`ConvertReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierReport {
    pub tier: &'static str,
    /// Packed value as uppercase hex
    pub value: String,
    /// Native channels as `[r, g, b, a]`
    pub channels: [u32; 4],
}

impl TierReport {
    fn new<P: PackedColor>(tier: &'static str, colour: P, value: String) -> Self {
        Self {
            tier,
            value,
            channels: colour.rgba().map(Into::into),
        }
    }
}

/// Everything `convert` knows about a colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertReport {
    pub hex: String,
    pub rgba: Rgba,
    pub hsva: Hsva,
    pub luma: f32,
    pub tiers: Vec<TierReport>,
}

impl ConvertReport {
    pub fn new(colour: Rgba) -> Self {
        let c64 = colour.to_color64();
        let c48 = colour.to_color48();
        let c32 = colour.to_color32();
        let c24 = colour.to_color24();
        let c16 = colour.to_color16();
        let c8 = colour.to_color8();

        let tiers = vec![
            TierReport::new("color64", c64, format!("{:016X}", c64.bits())),
            TierReport::new(
                "color48",
                c48,
                c48.channels().iter().map(|c| format!("{:04X}", c)).collect(),
            ),
            TierReport::new("color32", c32, format!("{:08X}", c32.bits())),
            TierReport::new(
                "color24",
                c24,
                c24.channels().iter().map(|c| format!("{:02X}", c)).collect(),
            ),
            TierReport::new("color16", c16, format!("{:04X}", c16.bits())),
            TierReport::new("color8", c8, format!("{:02X}", c8.bits())),
        ];

        Self {
            hex: colour.to_hex(),
            rgba: colour,
            hsva: colour.to_hsva(),
            luma: colour.luma(),
            tiers,
        }
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ColorError::Encode {
            message: format!("Failed to encode report as JSON: {}", e),
            help: None,
        })
    }

    /// Aligned plain-text form, one field per line.
    pub fn render_text(&self) -> String {
        let [r, g, b, a] = self.rgba.rgba();
        let hsva = &self.hsva;

        let mut out = String::new();
        let _ = writeln!(out, "{:<9}{}", "hex", self.hex);
        let _ = writeln!(out, "{:<9}{:.3} {:.3} {:.3} {:.3}", "rgba", r, g, b, a);
        let _ = writeln!(
            out,
            "{:<9}{:.1} {:.3} {:.3} {:.3}",
            "hsva", hsva.hue, hsva.saturation, hsva.value, hsva.alpha
        );
        let _ = writeln!(out, "{:<9}{:.4}", "luma", self.luma);

        for tier in &self.tiers {
            let channels = tier.channels.map(|c| c.to_string()).join(" ");
            let _ = writeln!(out, "{:<9}{:<18}{}", tier.tier, tier.value, channels);
        }

        out
    }
}

pub fn run(args: ConvertArgs, ctx: &Context) -> Result<()> {
    let colour = ctx.colour(&args.colour)?;
    let report = ConvertReport::new(colour);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
