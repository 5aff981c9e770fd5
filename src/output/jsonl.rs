#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. Token records, in command-line order (verbose only)
//! 2. Flag records: short flags then long flags, each sorted by name
//! 3. Other records, in command-line order
//! 4. Separator records, in command-line order
//! 5. One status record

use crate::parser::{FlagValue, ParsedArguments, TokenClass};
use serde::Serialize;

/// JSONL output formatter
///
/// Formats a parsed snapshot as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the snapshot as JSONL
    ///
    /// # Arguments
    ///
    /// * `parsed` - The snapshot to format
    /// * `verbose` - If true, start with one record per raw token
    pub fn format(&self, parsed: &ParsedArguments, verbose: bool) -> String {
        let mut output = String::new();

        if verbose {
            for (position, token, class) in parsed.classified_tokens() {
                push_record(
                    &mut output,
                    &TokenRecord {
                        record_type: "token",
                        position,
                        token,
                        class,
                    },
                );
            }
        }

        let flags = parsed
            .single_flags()
            .iter()
            .map(|flag| ("short", flag))
            .chain(parsed.long_flags().iter().map(|flag| ("long", flag)));
        for (kind, (name, value)) in flags {
            push_record(
                &mut output,
                &FlagRecord {
                    record_type: "flag",
                    kind,
                    name,
                    value,
                },
            );
        }

        for arg in parsed.other() {
            push_record(
                &mut output,
                &OtherRecord {
                    record_type: "other",
                    position: arg.position,
                    text: &arg.text,
                },
            );
        }

        for &position in parsed.separators() {
            push_record(
                &mut output,
                &SeparatorRecord {
                    record_type: "separator",
                    position,
                },
            );
        }

        push_record(
            &mut output,
            &StatusRecord {
                record_type: "status",
                argument_count: parsed.argument_count(),
                no_arguments: parsed.no_arguments(),
                piped_input: parsed.piped_input(),
            },
        );

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Token record for JSONL output
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    position: usize,
    token: &'a str,
    class: TokenClass,
}

/// Flag record for JSONL output
#[derive(Debug, Serialize)]
struct FlagRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    kind: &'static str,
    name: &'a str,
    value: &'a FlagValue,
}

/// Other record for JSONL output
#[derive(Debug, Serialize)]
struct OtherRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    position: usize,
    text: &'a str,
}

/// Separator record for JSONL output
#[derive(Debug, Serialize)]
struct SeparatorRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    position: usize,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    argument_count: usize,
    no_arguments: bool,
    /// `null` when nothing was piped
    piped_input: Option<&'a str>,
}
