use clap::Parser;
use colorkit::cli::{Cli, Commands, Context};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::load(cli.swatches.as_deref())?;

    match cli.command {
        Commands::Convert(args) => colorkit::cli::convert::run(args, &ctx)?,
        Commands::Hsv(args) => colorkit::cli::hsv::run(args, &ctx)?,
        Commands::Blend(args) => colorkit::cli::blend::run(args, &ctx)?,
        Commands::Adjust(args) => colorkit::cli::adjust::run(args, &ctx)?,
    }

    Ok(())
}
