//! quizbank CLI - question bank maintenance.

mod cli;
mod commands;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Rejected before the bank is touched, with clap's usage output and exit code.
    if let Err(e) = cli.filter_config().validate() {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, e)
            .exit();
    }

    if let Err(e) = commands::prune::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
