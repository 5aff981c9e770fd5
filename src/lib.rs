#![forbid(unsafe_code)]

//! simpleargs: schema-less command-line classification
//!
//! [`parser::parse`] reads the process's arguments and any piped stdin and
//! sorts every token into short flags, long flags, separators or "other",
//! returning an immutable [`parser::ParsedArguments`] snapshot. The snapshot
//! carries a [`style::Style`] entry point for building chainable ANSI styles.
//!
//! ```no_run
//! # async fn demo() {
//! let cli = simpleargs::parse().await;
//!
//! if cli.no_arguments() || cli.has_long("help") {
//!     println!("{}", cli.style().bold().attribute("brightCyan").paint("usage: demo [-v] FILE"));
//! }
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod parser;
pub mod style;

pub use parser::{FlagValue, ParseOptions, ParsedArguments, classify, parse};
pub use style::{Style, StyleHandle};
