#![forbid(unsafe_code)]

//! Token classification
//!
//! One left-to-right pass over the raw tokens with a single token of
//! lookahead. Each token lands in exactly one bucket, is consumed as the value
//! of the flag before it, or (malformed short flags only) is dropped.

use super::options::{MalformedShortFlag, ParseOptions};
use super::patterns::{LONG_FLAG_NAME, SHORT_FLAG_NAME};
use super::snapshot::{FlagValue, OtherArg, ParsedArguments, TokenClass};
use crate::style::Style;
use std::collections::BTreeMap;

/// Classifies `tokens` into a frozen [`ParsedArguments`]
///
/// `piped_input` is stored as-is and never influences classification.
/// Positions reported in the result are 1-based.
///
/// ```
/// use simpleargs::parser::{classify, FlagValue, ParseOptions};
///
/// let parsed = classify(&["-o", "out.txt", "--dry-run"], None, &ParseOptions::default());
/// assert_eq!(parsed.single_flags()["o"], FlagValue::Value("out.txt".into()));
/// assert!(parsed.long_flags()["dry-run"].is_switch());
/// ```
pub fn classify<S: AsRef<str>>(
    tokens: &[S],
    piped_input: Option<String>,
    options: &ParseOptions,
) -> ParsedArguments {
    let mut scan = Scan::new(options.malformed_short_flags);

    for (index, current) in tokens.iter().enumerate() {
        let next = tokens.get(index + 1).map(AsRef::as_ref);
        scan.token(current.as_ref(), index + 1, next);
    }

    let tokens = tokens.iter().map(|token| token.as_ref().to_string()).collect();
    scan.freeze(tokens, piped_input)
}

/// A token that should not be taken as a flag's value
///
/// A leading `-` also covers `--`.
fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Mutable state of one classification pass
struct Scan {
    single_flags: BTreeMap<String, FlagValue>,
    long_flags: BTreeMap<String, FlagValue>,
    other: Vec<OtherArg>,
    separators: Vec<usize>,
    classes: Vec<TokenClass>,
    malformed_short_flags: MalformedShortFlag,
    /// Set when the current token consumed the next one as its value
    skip_next: bool,
}

impl Scan {
    fn new(malformed_short_flags: MalformedShortFlag) -> Self {
        Scan {
            single_flags: BTreeMap::new(),
            long_flags: BTreeMap::new(),
            other: Vec::new(),
            separators: Vec::new(),
            classes: Vec::new(),
            malformed_short_flags,
            skip_next: false,
        }
    }

    fn token(&mut self, current: &str, position: usize, next: Option<&str>) {
        let class = if self.skip_next {
            self.skip_next = false;
            TokenClass::FlagValue
        } else {
            let mut chars = current.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some('-'), Some('-'), Some(_)) => {
                    self.long_flag(current, &current[2..], position, next)
                }
                (Some('-'), Some('-'), None) => {
                    self.separators.push(position);
                    TokenClass::Separator
                }
                (Some('-'), Some(_), _) => self.short_flag(current, &current[1..], position, next),
                _ => self.push_other(current, position),
            }
        };

        tracing::trace!(position, token = current, ?class, "classified token");
        self.classes.push(class);
    }

    fn long_flag(
        &mut self,
        current: &str,
        name: &str,
        position: usize,
        next: Option<&str>,
    ) -> TokenClass {
        if !LONG_FLAG_NAME.is_match(name) {
            return self.push_other(current, position);
        }

        let value = self.value_for(next);
        self.long_flags.insert(name.to_string(), value);
        TokenClass::LongFlag
    }

    fn short_flag(
        &mut self,
        current: &str,
        name: &str,
        position: usize,
        next: Option<&str>,
    ) -> TokenClass {
        if !SHORT_FLAG_NAME.is_match(name) {
            return match self.malformed_short_flags {
                MalformedShortFlag::Drop => TokenClass::Dropped,
                MalformedShortFlag::Other => self.push_other(current, position),
            };
        }

        // A flag-looking successor wins over bundling, so `-lvk --x` records
        // `lvk` as a single name.
        if next.is_some_and(looks_like_flag) {
            self.single_flags.insert(name.to_string(), FlagValue::Switch);
            return TokenClass::SingleFlag;
        }

        if name.len() > 1 {
            for letter in name.chars() {
                self.single_flags
                    .insert(letter.to_string(), FlagValue::Switch);
            }
            return TokenClass::Bundle;
        }

        let value = self.value_for(next);
        self.single_flags.insert(name.to_string(), value);
        TokenClass::SingleFlag
    }

    /// Takes `next` as a flag value unless it is absent or looks like a flag
    fn value_for(&mut self, next: Option<&str>) -> FlagValue {
        match next {
            Some(value) if !looks_like_flag(value) => {
                self.skip_next = true;
                FlagValue::Value(value.to_string())
            }
            _ => FlagValue::Switch,
        }
    }

    fn push_other(&mut self, current: &str, position: usize) -> TokenClass {
        self.other.push(OtherArg {
            text: current.to_string(),
            position,
        });
        TokenClass::Other
    }

    fn freeze(self, tokens: Vec<String>, piped_input: Option<String>) -> ParsedArguments {
        let argument_count = tokens.len();
        let no_arguments = argument_count == 0 && piped_input.is_none();

        tracing::debug!(
            argument_count,
            single_flags = self.single_flags.len(),
            long_flags = self.long_flags.len(),
            other = self.other.len(),
            separators = self.separators.len(),
            piped = piped_input.is_some(),
            "classified command line"
        );

        ParsedArguments {
            single_flags: self.single_flags,
            long_flags: self.long_flags,
            other: self.other,
            piped_input,
            separators: self.separators,
            no_arguments,
            argument_count,
            tokens,
            token_classes: self.classes,
            style: Style,
        }
    }
}
