#![forbid(unsafe_code)]

//! Piped standard-input detection and normalization

pub mod piped;

pub use piped::{InputError, normalize_lines, read_piped, read_stdin};
