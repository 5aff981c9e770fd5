#![forbid(unsafe_code)]

//! Process-level entry points
//!
//! These gather the two external inputs (argument tokens and piped stdin) and
//! hand them to [`classify`]. Capturing stdin is the only suspension point.

use super::classifier::classify;
use super::options::ParseOptions;
use super::snapshot::ParsedArguments;
use crate::input::{InputError, read_stdin};
use std::time::Duration;

/// Parses the process's arguments and piped stdin with default options
pub async fn parse() -> ParsedArguments {
    parse_with(&ParseOptions::default()).await
}

/// Parses the process's arguments and piped stdin
///
/// Arguments that are not valid Unicode are converted lossily.
pub async fn parse_with(options: &ParseOptions) -> ParsedArguments {
    let tokens = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    parse_from(tokens, options).await
}

/// Parses explicit tokens together with the process's piped stdin
pub async fn parse_from<I, S>(tokens: I, options: &ParseOptions) -> ParsedArguments
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
    let piped_input = capture_piped(options.stdin_timeout).await;
    classify(&tokens, piped_input, options)
}

/// Reads stdin, turning every failure into "no piped input"
async fn capture_piped(timeout: Option<Duration>) -> Option<String> {
    match read_stdin(timeout).await {
        Ok(text) => Some(text),
        Err(InputError::NoPipedInput) => {
            tracing::debug!("stdin is a terminal, no piped input");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring piped input");
            None
        }
    }
}
