//! Swatch book (colorkit.yaml) parsing.
//!
//! A swatch book names colours so CLI arguments can refer to them as
//! `$name` instead of repeating hex strings:
//!
//! ```yaml
//! name: brand
//! swatches:
//!   gold: F7AD45FF
//!   ink: "1A1A2EFF"
//! ```
//!
//! Values go through the strict hex parser. Quote values made only of
//! digits, otherwise YAML reads them as numbers.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ColorError, Result};
use crate::types::Rgba;

/// Default swatch book file name, looked up in the working directory.
pub const DEFAULT_SWATCH_FILE: &str = "colorkit.yaml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SwatchFile {
    name: Option<String>,
    swatches: BTreeMap<String, serde_yaml::Value>,
}

/// Named colours loaded from a swatch book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwatchBook {
    /// Optional book name
    pub name: Option<String>,

    swatches: BTreeMap<String, Rgba>,
}

impl SwatchBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a swatch book from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ColorError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read swatch book: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a swatch book from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let file: SwatchFile = serde_yaml::from_str(content).map_err(|e| ColorError::Config {
            message: format!("Invalid swatch book: {}", e),
            help: Some("Check colorkit.yaml syntax".to_string()),
        })?;

        let mut book = Self {
            name: file.name,
            swatches: BTreeMap::new(),
        };

        for (name, value) in file.swatches {
            let colour = match value {
                serde_yaml::Value::String(hex) => hex.parse::<Rgba>().map_err(|e| match e {
                    ColorError::Parse { message, help } => ColorError::Config {
                        message: format!("Swatch '{}': {}", name, message),
                        help,
                    },
                    other => other,
                })?,
                serde_yaml::Value::Number(n) => {
                    return Err(ColorError::Config {
                        message: format!("Swatch '{}' was read as the number {}", name, n),
                        help: Some(format!("Quote the value: {}: \"{}\"", name, n)),
                    })
                }
                _ => {
                    return Err(ColorError::Config {
                        message: format!("Swatch '{}' must be a hex string", name),
                        help: None,
                    })
                }
            };
            book.swatches.insert(name, colour);
        }

        Ok(book)
    }

    /// Get a colour by name. A leading `$` is ignored.
    pub fn get(&self, name: &str) -> Option<Rgba> {
        let name = name.strip_prefix('$').unwrap_or(name);
        self.swatches.get(name).copied()
    }

    /// Add or replace a swatch.
    pub fn insert(&mut self, name: impl Into<String>, colour: Rgba) {
        self.swatches.insert(name.into(), colour);
    }

    /// Resolve a colour argument: `$name` looks up a swatch, anything else
    /// is parsed as strict hex.
    pub fn resolve(&self, arg: &str) -> Result<Rgba> {
        let arg = arg.trim();
        match arg.strip_prefix('$') {
            Some(name) => self.get(name).ok_or_else(|| ColorError::Parse {
                message: format!("Undefined swatch: ${}", name),
                help: if self.swatches.is_empty() {
                    Some(format!("No swatch book loaded; create {}", DEFAULT_SWATCH_FILE))
                } else {
                    Some(format!(
                        "Available swatches: {}",
                        self.names().collect::<Vec<_>>().join(", ")
                    ))
                },
            }),
            None => arg.parse(),
        }
    }

    /// Swatch names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.swatches.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book() {
        let yaml = r##"
name: brand
swatches:
  gold: F7AD45FF
  ink: "#1A1A2EFF"
  flash: F00F
"##;
        let book = SwatchBook::parse(yaml).unwrap();

        assert_eq!(book.name.as_deref(), Some("brand"));
        assert_eq!(book.len(), 3);
        assert_eq!(book.get("gold").unwrap().to_hex(), "F7AD45FF");
        assert_eq!(book.get("$ink").unwrap().to_hex(), "1A1A2EFF");
        assert_eq!(book.get("flash").unwrap(), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["flash", "gold", "ink"]);
    }

    #[test]
    fn test_parse_empty() {
        let book = SwatchBook::parse("name: empty").unwrap();
        assert!(book.is_empty());
        assert!(book.get("gold").is_none());
    }

    #[test]
    fn test_numeric_value_needs_quotes() {
        let err = SwatchBook::parse("swatches:\n  grey: 80808080\n").unwrap_err();
        assert!(matches!(err, ColorError::Config { .. }));
        assert!(err.to_string().contains("grey"));
    }

    #[test]
    fn test_bad_hex_is_config_error() {
        let err = SwatchBook::parse("swatches:\n  oops: GG0000FF\n").unwrap_err();
        match err {
            ColorError::Config { message, .. } => assert!(message.contains("oops")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            SwatchBook::parse("swatches: [unclosed"),
            Err(ColorError::Config { .. })
        ));
    }

    #[test]
    fn test_resolve() {
        let mut book = SwatchBook::new();
        book.insert("sky", Rgba::rgb(0.0, 0.5, 1.0));

        assert_eq!(book.resolve("$sky").unwrap(), Rgba::rgb(0.0, 0.5, 1.0));
        assert_eq!(book.resolve("FFFFFFFF").unwrap(), Rgba::WHITE);
        assert!(book.resolve("$sea").is_err());
        assert!(book.resolve("nothex").is_err());
    }
}
