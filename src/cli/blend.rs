use clap::Args;

use crate::error::Result;
use crate::types::{BlendMode, Rgba};

use super::Context;

/// Combine two colours with a blend mode
#[derive(Args, Debug)]
pub struct BlendArgs {
    /// Blend mode (multiply, screen, overlay, soft-light, ...) or `mix`
    pub mode: String,

    /// Bottom colour
    pub base: String,

    /// Top colour
    pub other: String,

    /// Mix ratio for `mix` (0 = base, 1 = other)
    #[arg(long, default_value_t = 0.5)]
    pub ratio: f32,

    /// Weight the result by the top colour's alpha
    #[arg(long)]
    pub alpha_weighted: bool,
}

/// Apply the requested operation. `mix` is a plain linear blend by `ratio`;
/// everything else is a [`BlendMode`].
pub fn evaluate(args: &BlendArgs, base: Rgba, other: Rgba) -> Result<Rgba> {
    if args.mode.trim().eq_ignore_ascii_case("mix") {
        return Ok(if args.alpha_weighted {
            base.alpha_adjusted_blend(other, |top| base.blend(args.ratio, top))
        } else {
            base.blend(args.ratio, other)
        });
    }

    let mode: BlendMode = args.mode.parse()?;
    Ok(if args.alpha_weighted {
        mode.apply_alpha_weighted(base, other)
    } else {
        mode.apply(base, other)
    })
}

pub fn run(args: BlendArgs, ctx: &Context) -> Result<()> {
    let base = ctx.colour(&args.base)?;
    let other = ctx.colour(&args.other)?;

    if args.alpha_weighted && other.alpha() == 0.0 {
        ctx.printer.transparent_top(&args.other);
    }

    let result = evaluate(&args, base, other)?;
    println!("{}", result);
    Ok(())
}
