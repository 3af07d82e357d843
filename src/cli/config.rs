//! TOML configuration file support for display preferences.
//!
//! Instead of passing flags on every invocation, users can keep their table
//! preferences in a config file:
//!
//! ```toml
//! # tracksplits.toml
//! [display]
//! grade = false
//! color = false
//! ```
//!
//! Command-line flags always win over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for tracksplits.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Table display preferences.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Configuration for the splits table rendering.
#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    /// Show the grade column (default: true).
    pub grade: Option<bool>,

    /// Use ANSI styling when printing (default: true).
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [display]
            grade = false
            color = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.display.grade, Some(false));
        assert_eq!(config.display.color, Some(false));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [display]
            grade = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.display.grade, Some(false));
        assert_eq!(config.display.color, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.display.grade, None);
        assert_eq!(config.display.color, None);
    }

    #[test]
    fn test_malformed_config() {
        assert!(Config::from_str("[display\ngrade =").is_err());
    }
}
