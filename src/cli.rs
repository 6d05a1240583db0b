use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::settings::TieBreak;

#[derive(Parser, Debug)]
#[command(author, version, about = "cricket tournament points table")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Compute every stage of a tournament file
    Process {
        /// Tournament file listing stages, groups and match files
        #[arg(short, long)]
        config: PathBuf,
        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute a single table for one roster
    Table {
        /// Match file (JSON array of match records)
        #[arg(short, long)]
        matches: PathBuf,
        /// Team in the roster; repeat for each team, in roster order
        #[arg(short, long = "team", required = true)]
        teams: Vec<String>,
        /// Overs in a full innings
        #[arg(long = "full-quota-overs", default_value_t = 20.0)]
        full_quota_overs: f64,
        /// Count run rates from tied matches that carry scores
        #[arg(long = "accumulate-rates-on-tie")]
        accumulate_rates_on_tie: bool,
        /// Order for teams level on points and NRR
        #[arg(long = "tie-break", value_enum, default_value_t = TieBreak::RosterOrder)]
        tie_break: TieBreak,
        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_command() {
        let cli = Cli::try_parse_from([
            "cricket_points_table",
            "table",
            "--matches",
            "matches.json",
            "--team",
            "Elite Eagles",
            "-t",
            "Hologram",
            "--tie-break",
            "alphabetical",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Table {
                matches: PathBuf::from("matches.json"),
                teams: vec!["Elite Eagles".to_string(), "Hologram".to_string()],
                full_quota_overs: 20.0,
                accumulate_rates_on_tie: false,
                tie_break: TieBreak::Alphabetical,
                output: None,
            }
        );
    }

    #[test]
    fn test_parse_table_rule_flags() {
        let cli = Cli::try_parse_from([
            "cricket_points_table",
            "table",
            "-m",
            "matches.json",
            "-t",
            "A",
            "--full-quota-overs",
            "50",
            "--accumulate-rates-on-tie",
            "--tie-break",
            "roster-order",
        ])
        .unwrap();

        let Command::Table {
            full_quota_overs,
            accumulate_rates_on_tie,
            tie_break,
            ..
        } = cli.command
        else {
            panic!("expected the table command");
        };
        assert_eq!(full_quota_overs, 50.0);
        assert!(accumulate_rates_on_tie);
        assert_eq!(tie_break, TieBreak::RosterOrder);
    }

    #[test]
    fn test_table_requires_a_team() {
        assert!(Cli::try_parse_from(["cricket_points_table", "table", "--matches", "m.json"]).is_err());
    }

    #[test]
    fn test_parse_process_command() {
        let cli = Cli::try_parse_from(["cricket_points_table", "process", "-c", "tournament.json"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Process {
                config: PathBuf::from("tournament.json"),
                output: None,
            }
        );
    }
}
