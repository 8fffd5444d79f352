use std::process::ExitCode;

use clap::Parser;
use stratus_cli::{init_tracing, run_cli, Cli, ConsoleTerminal};
use stratus_core::LoginError;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let mut terminal = ConsoleTerminal::stdio();
    match run_cli(cli, &mut terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("FAILED");
            // Login errors already render their cause.
            if error.is::<LoginError>() {
                println!("{error}");
            } else {
                println!("{error:#}");
            }
            ExitCode::FAILURE
        }
    }
}
