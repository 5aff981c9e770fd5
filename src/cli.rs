//! CLI argument parsing and command dispatch

pub mod app;
pub mod args;
pub mod showcase;

// Re-export types for convenient access
pub use app::{CliError, run};
pub use args::{Cli, Command, InspectArgs, ShowcaseArgs};
pub use showcase::Section;
