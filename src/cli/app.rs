//! Command dispatch

use crate::cli::args::{Cli, Command, InspectArgs, ShowcaseArgs};
use crate::cli::showcase;
use crate::config::{Config, ConfigError, OutputFormat};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::parser::{MalformedShortFlag, ParsedArguments, classify, parse_from};
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use termcolor::{ColorChoice, StandardStream, WriteColor};
use thiserror::Error;

/// Errors surfaced by the binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Runs a parsed command line
pub async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Inspect(args) => inspect(args).await,
        Command::Showcase(args) => run_showcase(&args),
    }
}

async fn inspect(args: InspectArgs) -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;

    let mut options = config.parse_options();
    if args.keep_malformed {
        options.malformed_short_flags = MalformedShortFlag::Other;
    }
    if let Some(ms) = args.stdin_timeout_ms {
        options.stdin_timeout = Some(Duration::from_millis(ms));
    }

    let parsed: ParsedArguments = if args.no_stdin {
        classify(&args.tokens, None, &options)
    } else {
        parse_from(args.tokens, &options).await
    };

    let format = args.format.unwrap_or(config.output.format);
    let color = args.color.unwrap_or(config.output.color);

    match format {
        OutputFormat::Human => HumanFormatter::new(color.into())
            .verbose(args.verbose)
            .write_to_stdout(&parsed)?,
        OutputFormat::Jsonl => {
            let output = JsonlFormatter::new().format(&parsed, args.verbose);
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn run_showcase(args: &ShowcaseArgs) -> Result<(), CliError> {
    let choice = match ColorChoice::from(args.color) {
        ColorChoice::Auto if !io::stdout().is_terminal() => ColorChoice::Never,
        choice => choice,
    };
    let mut stdout = StandardStream::stdout(choice);

    let output = showcase::render(args.section, stdout.supports_color());
    write!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
