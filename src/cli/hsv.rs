use clap::Args;

use crate::error::Result;
use crate::types::Rgba;

use super::Context;

/// Build a colour from hue, saturation and value
#[derive(Args, Debug)]
pub struct HsvArgs {
    /// Hue in degrees (clamped to 0..=360)
    #[arg(allow_negative_numbers = true)]
    pub hue: f32,

    /// Saturation (clamped to 0..=1)
    pub saturation: f32,

    /// Value (clamped to 0..=1)
    pub value: f32,

    /// Alpha (clamped to 0..=1)
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f32,
}

pub fn run(args: HsvArgs, _ctx: &Context) -> Result<()> {
    let colour = Rgba::from_hsva(args.hue, args.saturation, args.value, args.alpha);
    println!("{}", colour);
    Ok(())
}
