#![forbid(unsafe_code)]

//! `simpleargs.toml` parsing
//!
//! Every section and key is optional; missing values fall back to the
//! defaults of [`ParseOptions`] and [`OutputConfig`].

use crate::parser::{MalformedShortFlag, ParseOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "simpleargs.toml";

/// Errors that can occur when loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Output format of the inspector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Jsonl,
}

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorOption> for termcolor::ColorChoice {
    fn from(option: ColorOption) -> Self {
        match option {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// `[parser]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    #[serde(default)]
    pub malformed_short_flags: MalformedShortFlag,
    /// Milliseconds to wait for piped stdin to close
    #[serde(default)]
    pub stdin_timeout_ms: Option<u64>,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub color: ColorOption,
}

/// Parsed `simpleargs.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Loads and parses a config file
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if given, else `simpleargs.toml` in `dir` if it exists,
    /// else the defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            return Config::load(path);
        }

        let default_path = dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading config");
            Config::load(&default_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Parses config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    /// Classifier options described by the `[parser]` section
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            malformed_short_flags: self.parser.malformed_short_flags,
            stdin_timeout: self.parser.stdin_timeout_ms.map(Duration::from_millis),
        }
    }
}
