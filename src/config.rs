//! Configuration file parsing and validation

pub mod simpleargs_toml;

pub use simpleargs_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, ConfigError, OutputConfig, OutputFormat, ParserConfig,
};
