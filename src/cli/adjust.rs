use clap::Args;

use crate::error::Result;
use crate::types::Rgba;

use super::Context;

/// Lighten, darken, invert or re-tune a colour
///
/// Steps run in a fixed order: hue/saturation/value, lighten, darken,
/// invert, alpha.
#[derive(Args, Debug, Default)]
pub struct AdjustArgs {
    /// Colour as hex or a `$swatch` name
    pub colour: String,

    /// Replace hue (degrees)
    #[arg(long, allow_negative_numbers = true)]
    pub hue: Option<f32>,

    /// Replace saturation (0..=1)
    #[arg(long)]
    pub saturation: Option<f32>,

    /// Replace value (0..=1)
    #[arg(long)]
    pub value: Option<f32>,

    /// Raise luma by this amount (negative darkens)
    #[arg(long, allow_negative_numbers = true)]
    pub lighten: Option<f32>,

    /// Lower luma by this amount (negative lightens)
    #[arg(long, allow_negative_numbers = true)]
    pub darken: Option<f32>,

    /// Invert the colour channels
    #[arg(long)]
    pub invert: bool,

    /// Replace alpha (0..=1)
    #[arg(long)]
    pub alpha: Option<f32>,
}

pub fn apply(args: &AdjustArgs, colour: Rgba) -> Rgba {
    let mut out = match (args.hue, args.saturation, args.value) {
        (None, None, None) => colour,
        (Some(h), None, None) => colour.with_hue(h),
        (None, Some(s), None) => colour.with_saturation(s),
        (None, None, Some(v)) => colour.with_value(v),
        (Some(h), Some(s), None) => colour.with_hue_saturation(h, s),
        (Some(h), None, Some(v)) => colour.with_hue_value(h, v),
        (None, Some(s), Some(v)) => colour.with_saturation_value(s, v),
        (Some(h), Some(s), Some(v)) => colour.with_hsv(h, s, v),
    };

    if let Some(amount) = args.lighten {
        out = out.lighten(amount);
    }
    if let Some(amount) = args.darken {
        out = out.darken(amount);
    }
    if args.invert {
        out = out.invert();
    }
    if let Some(alpha) = args.alpha {
        out = out.with_alpha(alpha);
    }

    out
}

pub fn run(args: AdjustArgs, ctx: &Context) -> Result<()> {
    let colour = ctx.colour(&args.colour)?;
    println!("{}", apply(&args, colour));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands};

    fn parse(argv: &[&str]) -> AdjustArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Commands::Adjust(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_options_is_identity() {
        let c = Rgba::from_hex("336699FF");
        assert_eq!(apply(&AdjustArgs::default(), c), c);
    }

    #[test]
    fn test_hue_then_invert() {
        let args = AdjustArgs {
            hue: Some(120.0),
            invert: true,
            ..Default::default()
        };
        let out = apply(&args, Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(out.to_hex(), "FF00FFFF");
    }

    #[test]
    fn test_lighten_black_to_white() {
        let args = AdjustArgs {
            lighten: Some(2.0),
            ..Default::default()
        };
        assert_eq!(apply(&args, Rgba::BLACK), Rgba::WHITE);
    }

    #[test]
    fn test_alpha() {
        let args = AdjustArgs {
            alpha: Some(0.0),
            ..Default::default()
        };
        assert_eq!(apply(&args, Rgba::WHITE).to_hex(), "FFFFFF00");
    }

    #[test]
    fn test_negative_luma_amounts_parse() {
        let args = parse(&["colorkit", "adjust", "336699FF", "--lighten", "-0.1"]);
        assert_eq!(args.lighten, Some(-0.1));

        let args = parse(&["colorkit", "adjust", "336699FF", "--darken", "-0.2", "--hue", "-30"]);
        assert_eq!(args.darken, Some(-0.2));
        assert_eq!(args.hue, Some(-30.0));

        let c = Rgba::from_hex("336699FF");
        assert_eq!(apply(&args, c), c.with_hue(-30.0).lighten(0.2));
    }
}
