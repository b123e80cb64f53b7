//! cursor-rules CLI entry point

use clap::Parser;
use cursor_rules::cli::{Cli, Command};
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match cli.command_or_default() {
        Command::Write { format } => cursor_rules::cli::write::run_write(&cli.dir, format),
        Command::List { format } => cursor_rules::cli::list::run_list(format),
    };

    process::exit(exit_code);
}

/// Route logs to stderr so stdout only carries command output
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cursor_rules=debug")
        } else {
            EnvFilter::new("cursor_rules=warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
