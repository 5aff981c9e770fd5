#![forbid(unsafe_code)]

//! Piped standard-input capture
//!
//! Standard input only counts as piped when it is not attached to an
//! interactive terminal. Piped data is read line by line until the stream
//! closes and reassembled with single newlines. Content is never validated:
//! bytes that are not UTF-8 are replaced with U+FFFD.

use std::io::{self, IsTerminal};
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Reasons no piped input could be captured
#[derive(Debug, Error)]
pub enum InputError {
    /// Standard input is a terminal, so nothing was piped in
    #[error("standard input is an interactive terminal, nothing was piped")]
    NoPipedInput,

    /// The stream did not close within the configured limit
    #[error("piped input did not close within {0:?}")]
    Timeout(Duration),

    /// Reading from the stream failed
    #[error("failed to read piped input: {0}")]
    Io(#[from] io::Error),
}

/// Reassembles lines read from a stream
///
/// Lines are joined with a single `\n`. A trailing newline on the final line
/// is not reproduced, and zero lines give an empty string.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(line.as_ref());
        output.push('\n');
    }

    if !lines.is_empty() {
        output.pop();
    }

    output
}

/// Reads piped input from `reader`
///
/// # Errors
///
/// - [`InputError::NoPipedInput`] when `is_terminal` is true; the reader is
///   not touched
/// - [`InputError::Timeout`] when `timeout` elapses before end of stream
/// - [`InputError::Io`] when reading fails
pub async fn read_piped<R>(
    reader: R,
    is_terminal: bool,
    timeout: Option<Duration>,
) -> Result<String, InputError>
where
    R: AsyncBufRead + Unpin,
{
    if is_terminal {
        return Err(InputError::NoPipedInput);
    }

    let lines = match timeout {
        Some(limit) => tokio::time::timeout(limit, collect_lines(reader))
            .await
            .map_err(|_| InputError::Timeout(limit))??,
        None => collect_lines(reader).await?,
    };

    tracing::debug!(lines = lines.len(), "captured piped input");

    Ok(normalize_lines(&lines))
}

/// Reads piped input from the process's standard input
pub async fn read_stdin(timeout: Option<Duration>) -> Result<String, InputError> {
    let is_terminal = io::stdin().is_terminal();
    read_piped(BufReader::new(tokio::io::stdin()), is_terminal, timeout).await
}

async fn collect_lines<R>(mut reader: R) -> io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        // `\r` only counts as part of the terminator when it precedes `\n`
        let line = match buf.strip_suffix(b"\n") {
            Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
            None => &buf[..],
        };
        lines.push(String::from_utf8_lossy(line).into_owned());
    }

    Ok(lines)
}
