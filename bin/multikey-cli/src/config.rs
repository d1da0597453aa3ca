use std::{fs, path::Path};

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Base name used in log lines when the config does not set one.
const DEFAULT_WHOAMI: &str = "multikey-cli";

/// The configuration values that dictate how the CLI renders output and logs.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// How command results are printed.
    pub(crate) output: OutputConfig,

    /// How the process identifies itself in logs.
    pub(crate) logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct OutputConfig {
    pub(crate) format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,

    /// One `name: value` pair per line.
    Text,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LoggingConfig {
    pub(crate) whoami: Option<String>,
}

impl LoggingConfig {
    pub(crate) fn whoami(&self) -> &str {
        self.whoami.as_deref().unwrap_or(DEFAULT_WHOAMI)
    }
}

impl Config {
    pub(crate) fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_toml(&contents)
    }

    pub(crate) fn from_toml(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("failed to parse config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.whoami(), DEFAULT_WHOAMI);
    }

    #[test]
    fn parses_all_fields() {
        let config = Config::from_toml(
            r#"
            [output]
            format = "text"

            [logging]
            whoami = "keygen-box"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.whoami(), "keygen-box");
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Config::from_toml("[output]\nformat = \"yaml\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::from_path("/nonexistent/multikey-cli.toml").is_err());
    }
}
