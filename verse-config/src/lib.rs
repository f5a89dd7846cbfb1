//! Shared configuration loader for the verse notation tools.
//!
//! `defaults/verses.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`VersesConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use verse_parser::Limits;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/verses.default.toml");

/// Top-level configuration consumed by the verse tools.
#[derive(Debug, Clone, Deserialize)]
pub struct VersesConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Knobs shared by the chapter parser and the range expander.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserConfig {
    /// Range cap; ranges are unbounded when unset.
    pub max_range_len: Option<usize>,
}

impl ParserConfig {
    pub fn limits(&self) -> Limits {
        Limits {
            max_range_len: self.max_range_len,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How parsed results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Compact JSON on a single line.
    Json,
    /// Indented JSON.
    Pretty,
    /// Rust debug representation.
    Debug,
    /// Canonical notation.
    Notation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<VersesConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.parser.max_range_len, None);
        assert_eq!(config.parser.limits(), Limits::unbounded());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "notation")
            .expect("override to apply")
            .set_override("parser.max_range_len", 20i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Notation);
        assert_eq!(config.parser.limits(), Limits::new(20));
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("output.format", "yaml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nformat = \"pretty\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Pretty);
        assert_eq!(config.parser.max_range_len, None);
    }

    #[test]
    fn user_file_sets_range_cap() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parser]\nmax_range_len = 50").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.parser.limits(), Limits::new(50));
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/verses.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/verses.toml").build();
        assert!(result.is_err());
    }
}
