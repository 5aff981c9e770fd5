#![forbid(unsafe_code)]

//! The frozen result of classifying a command line

use crate::style::Style;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Value recorded for a flag: a bare switch or an attached string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlagValue {
    /// Flag present without a value (`true`)
    Switch,
    /// Flag followed by a value token
    Value(String),
}

impl FlagValue {
    pub fn is_switch(&self) -> bool {
        matches!(self, FlagValue::Switch)
    }

    /// The attached value, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Switch => None,
            FlagValue::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Switch => f.write_str("true"),
            FlagValue::Value(value) => f.write_str(value),
        }
    }
}

impl Serialize for FlagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FlagValue::Switch => serializer.serialize_bool(true),
            FlagValue::Value(value) => serializer.serialize_str(value),
        }
    }
}

/// A token that is neither a flag, a flag value, nor a separator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherArg {
    pub text: String,
    /// 1-based position in the raw token list
    pub position: usize,
}

/// How a single raw token was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    /// `-v`, `-o`, or a letter run recorded under its whole name
    SingleFlag,
    /// `-lvk` expanded into one switch per letter
    Bundle,
    /// `--name` or `--dry-run`
    LongFlag,
    /// Consumed as the value of the preceding flag
    FlagValue,
    /// Recorded in [`ParsedArguments::other`]
    Other,
    /// A bare `--`
    Separator,
    /// Malformed short flag that was not recorded anywhere
    Dropped,
}

/// Immutable snapshot of a classified command line
///
/// Built once by [`classify`](crate::parser::classify) and never mutated
/// afterwards; every accessor hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedArguments {
    pub(super) single_flags: BTreeMap<String, FlagValue>,
    pub(super) long_flags: BTreeMap<String, FlagValue>,
    pub(super) other: Vec<OtherArg>,
    pub(super) piped_input: Option<String>,
    pub(super) separators: Vec<usize>,
    pub(super) no_arguments: bool,
    pub(super) argument_count: usize,
    pub(super) tokens: Vec<String>,
    pub(super) token_classes: Vec<TokenClass>,
    #[serde(skip)]
    pub(super) style: Style,
}

impl ParsedArguments {
    /// Single-dash flags keyed by name
    pub fn single_flags(&self) -> &BTreeMap<String, FlagValue> {
        &self.single_flags
    }

    /// Double-dash flags keyed by name
    pub fn long_flags(&self) -> &BTreeMap<String, FlagValue> {
        &self.long_flags
    }

    /// Positional and unrecognized tokens, in command-line order
    pub fn other(&self) -> &[OtherArg] {
        &self.other
    }

    /// Normalized piped input; `None` when nothing was piped
    ///
    /// `Some("")` means stdin was piped but empty.
    pub fn piped_input(&self) -> Option<&str> {
        self.piped_input.as_deref()
    }

    /// 1-based positions of bare `--` tokens
    pub fn separators(&self) -> &[usize] {
        &self.separators
    }

    /// True when there were no tokens and nothing was piped
    pub fn no_arguments(&self) -> bool {
        self.no_arguments
    }

    /// Number of raw tokens, excluding the program name
    pub fn argument_count(&self) -> usize {
        self.argument_count
    }

    /// The raw tokens, in command-line order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Per-token classification; index `i` describes position `i + 1`
    pub fn token_classes(&self) -> &[TokenClass] {
        &self.token_classes
    }

    /// `(position, token, class)` for every raw token
    pub fn classified_tokens(&self) -> impl Iterator<Item = (usize, &str, TokenClass)> {
        self.tokens
            .iter()
            .zip(&self.token_classes)
            .enumerate()
            .map(|(index, (token, class))| (index + 1, token.as_str(), *class))
    }

    /// Entry point into the styling helper
    pub fn style(&self) -> Style {
        self.style
    }

    /// Looks a flag up as a short flag first, then as a long flag
    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.single_flags
            .get(name)
            .or_else(|| self.long_flags.get(name))
    }

    pub fn has_single(&self, name: &str) -> bool {
        self.single_flags.contains_key(name)
    }

    pub fn has_long(&self, name: &str) -> bool {
        self.long_flags.contains_key(name)
    }
}
