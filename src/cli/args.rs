//! Command-line interface of the `simpleargs` inspector

use crate::cli::showcase::Section;
use crate::config::{ColorOption, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Classify command lines and preview terminal styles
#[derive(Debug, Parser)]
#[command(name = "simpleargs", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify the tokens after `--` (and any piped stdin) and print the result
    Inspect(InspectArgs),

    /// Print every style the styling helper can produce
    Showcase(ShowcaseArgs),
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Output format [default: from config, else human]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to use colors [default: from config, else auto]
    #[arg(long, value_enum)]
    pub color: Option<ColorOption>,

    /// Config file [default: ./simpleargs.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also print each token with its classification
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not read piped stdin
    #[arg(long)]
    pub no_stdin: bool,

    /// Record malformed short flags such as `-3` in `other` instead of dropping them
    #[arg(long)]
    pub keep_malformed: bool,

    /// Stop waiting for piped stdin after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub stdin_timeout_ms: Option<u64>,

    /// Tokens to classify
    #[arg(last = true, allow_hyphen_values = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ShowcaseArgs {
    /// Which part of the showcase to print
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub section: Section,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorOption::Auto)]
    pub color: ColorOption,
}
