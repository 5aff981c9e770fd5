#![forbid(unsafe_code)]

//! Command-line classification into a frozen snapshot

pub mod classifier;
pub mod entry;
pub mod options;
pub mod patterns;
pub mod snapshot;

pub use classifier::classify;
pub use entry::{parse, parse_from, parse_with};
pub use options::{MalformedShortFlag, ParseOptions};
pub use snapshot::{FlagValue, OtherArg, ParsedArguments, TokenClass};
