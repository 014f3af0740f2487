//! Status lines for the colorkit CLI.
//!
//! Colour values and reports go to stdout so they can be piped. Everything
//! else (which swatch book was loaded, how `$name` references resolved,
//! blend warnings) goes to stderr as a right-aligned verb and a message.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::Rgba;

/// Width of the right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Colour of the verb column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Done,
    Note,
    Warn,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Done => "\x1b[1;32m",
            Tone::Note => "\x1b[1;36m",
            Tone::Warn => "\x1b[1;33m",
        }
    }
}

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Writes CLI status lines to stderr, with ANSI colour on a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// `      Loaded 3 swatches from colorkit.yaml`
    pub fn swatches_loaded(&self, count: usize, path: &Path) {
        let message = format!(
            "{} from {}",
            plural(count, "swatch", "swatches"),
            display_path(path)
        );
        self.emit(Tone::Done, "Loaded", &message);
    }

    /// `    Resolved $gold F7AD45FF`, with the hex dimmed.
    pub fn swatch_resolved(&self, reference: &str, colour: Rgba) {
        let hex = colour.to_hex();
        let message = if self.color {
            format!("{reference} {DIM}{hex}{RESET}")
        } else {
            format!("{reference} {hex}")
        };
        self.emit(Tone::Note, "Resolved", &message);
    }

    /// Warn that an alpha-weighted blend has a fully transparent top colour.
    pub fn transparent_top(&self, reference: &str) {
        let message = format!("{reference} has zero alpha; result equals the base colour");
        self.emit(Tone::Warn, "Transparent", &message);
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.color {
            format!("{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", self.line(tone, verb, message));
    }
}

/// `plural(1, "swatch", "swatches")` is "1 swatch".
pub fn plural(n: usize, singular: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { many })
}

/// Path relative to the working directory when it lies beneath it.
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .map(|relative| {
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                relative.display().to_string()
            }
        })
        .unwrap_or_else(|| path.display().to_string())
}
