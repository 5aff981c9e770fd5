#![forbid(unsafe_code)]

//! Chainable ANSI terminal styling

pub mod code;
pub mod handle;

pub use code::{Code, Color, UnknownAttribute};
pub use handle::{Style, StyleHandle};
