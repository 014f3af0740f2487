use miette::Diagnostic;
use thiserror::Error;

/// Error type for the fallible edges of colorkit.
///
/// The colour algebra itself never fails; these variants cover strict hex
/// parsing, swatch book loading, CLI argument evaluation and report
/// encoding.
#[derive(Error, Diagnostic, Debug)]
pub enum ColorError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(colorkit::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(colorkit::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(colorkit::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(colorkit::encode))]
    Encode {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ColorError>;
