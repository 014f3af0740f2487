pub mod adjust;
pub mod blend;
pub mod convert;
pub mod hsv;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::output::Printer;
use crate::swatch::{SwatchBook, DEFAULT_SWATCH_FILE};
use crate::types::Rgba;

/// colorkit - fixed-precision colour conversion and colour algebra
#[derive(Parser, Debug)]
#[command(name = "colorkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Swatch book for `$name` colour references (defaults to ./colorkit.yaml)
    #[arg(long, global = true)]
    pub swatches: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a colour in every encoding
    Convert(convert::ConvertArgs),

    /// Build a colour from hue, saturation and value
    Hsv(hsv::HsvArgs),

    /// Combine two colours with a blend mode
    Blend(blend::BlendArgs),

    /// Lighten, darken, invert or re-tune a colour
    Adjust(adjust::AdjustArgs),
}

/// Shared state for subcommands.
pub struct Context {
    pub swatches: SwatchBook,
    pub printer: Printer,
}

impl Context {
    /// Load the swatch book named on the command line, or the default file
    /// when it exists. A missing default file is not an error.
    pub fn load(swatches: Option<&Path>) -> Result<Self> {
        let printer = Printer::new();
        let default_path = Path::new(DEFAULT_SWATCH_FILE);

        let path = match swatches {
            Some(path) => Some(path),
            None if default_path.is_file() => Some(default_path),
            None => None,
        };

        let swatches = match path {
            Some(path) => {
                let book = SwatchBook::load(path)?;
                printer.swatches_loaded(book.len(), path);
                book
            }
            None => SwatchBook::new(),
        };

        Ok(Self { swatches, printer })
    }

    /// Resolve a colour argument (strict hex or `$name`).
    pub fn colour(&self, arg: &str) -> Result<Rgba> {
        let colour = self.swatches.resolve(arg)?;
        if arg.trim_start().starts_with('$') {
            self.printer.swatch_resolved(arg.trim(), colour);
        }
        Ok(colour)
    }
}
