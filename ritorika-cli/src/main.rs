//! Ritorika command-line entry point

use clap::Parser;
use ritorika_cli::commands::{Commands, GlobalArgs};
use std::process::ExitCode;

/// Style analysis of Russian text: cases, repeated words and clichés
#[derive(Debug, Parser)]
#[command(name = "ritorika", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose, cli.global.quiet);

    log::debug!("Arguments: {:?}", cli);

    match cli.command.execute(&cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
