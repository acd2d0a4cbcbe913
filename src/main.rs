use anyhow::Result;

use mtgdc_corpus::cli::Command;
use mtgdc_corpus::{handle_check, handle_resolve, handle_stats, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Stats { directory, filters } => handle_stats(directory, filters),
        Command::Resolve {
            name,
            directory,
            filters,
        } => handle_resolve(name, directory, filters),
        Command::Check {
            directory,
            cards,
            filters,
        } => handle_check(directory, cards, filters),
    }
}
