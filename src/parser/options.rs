#![forbid(unsafe_code)]

//! Classifier options

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do with a single-dash token whose name is not all letters
/// (`-3`, `-!`, `-a1`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedShortFlag {
    /// Record the token nowhere
    #[default]
    Drop,
    /// Record the whole token in `other`
    Other,
}

/// Options for a single parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub malformed_short_flags: MalformedShortFlag,
    /// Upper bound on waiting for piped stdin to close; `None` waits forever
    pub stdin_timeout: Option<Duration>,
}
