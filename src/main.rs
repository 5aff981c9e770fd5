//! simpleargs - inspect how command lines are classified

use clap::Parser;
use simpleargs::cli::{self, Cli};
use simpleargs::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(cli::run(cli));

    // A stdin read abandoned after `--stdin-timeout-ms` stays blocked until the
    // pipe closes; do not wait for it.
    runtime.shutdown_background();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
