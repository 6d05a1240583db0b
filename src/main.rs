use anyhow::Result;

use cricket_points_table::cli::Command;
use cricket_points_table::{handle_process, handle_table, interpret, table_settings};

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
        Command::Process { config, output } => handle_process(config, output.as_deref()),
        Command::Table {
            matches,
            teams,
            full_quota_overs,
            accumulate_rates_on_tie,
            tie_break,
            output,
        } => handle_table(
            matches,
            teams,
            table_settings(*full_quota_overs, *accumulate_rates_on_tie, *tie_break),
            output.as_deref(),
        ),
    }
}
