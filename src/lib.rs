pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod services;
pub mod standings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::{StandingsSettings, TieBreak};
use crate::config::tournament::{GroupConfig, StageConfig, TournamentConfig};
use crate::services::processing::ProcessingService;
use crate::services::report::TournamentReport;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_process(config: &Path, output: Option<&Path>) -> Result<()> {
    let config = TournamentConfig::load(config)?;
    let service = ProcessingService::new(config);
    let report = service.run()?;
    emit_report(&report, output)
}

pub fn handle_table(
    matches: &Path,
    teams: &[String],
    settings: StandingsSettings,
    output: Option<&Path>,
) -> Result<()> {
    let config = single_table_config(matches.to_path_buf(), teams, settings);
    config.validate()?;
    let report = ProcessingService::new(config).run()?;
    emit_report(&report, output)
}

pub fn table_settings(full_quota_overs: f64, accumulate_rates_on_tie: bool, tie_break: TieBreak) -> StandingsSettings {
    StandingsSettings {
        full_quota_overs,
        accumulate_rates_on_tie,
        tie_break,
        ..StandingsSettings::default()
    }
}

fn single_table_config(matches: PathBuf, teams: &[String], settings: StandingsSettings) -> TournamentConfig {
    TournamentConfig {
        settings,
        stages: vec![StageConfig {
            name: "Table".to_string(),
            matches,
            groups: vec![GroupConfig {
                name: "Table".to_string(),
                teams: teams.to_vec(),
            }],
        }],
    }
}

fn emit_report(report: &TournamentReport, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => loader::write_json(path, report),
        None => {
            let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{}", json);
            Ok(())
        }
    }
}
