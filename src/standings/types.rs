use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

pub type TeamId = String;

/// Accumulated statistics for one team in one table.
///
/// `nrr` is derived from the four totals and is never summed match by match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: TeamId,
    pub matches: u32,
    pub won: u32,
    pub loss: u32,
    pub tie: u32,
    pub points: u32,
    pub total_runs_scored: f64,
    pub total_overs_faced: f64,
    pub total_runs_conceded: f64,
    pub total_overs_bowled: f64,
    pub nrr: f64,
}

impl TeamRecord {
    pub fn new(team: impl Into<TeamId>) -> Self {
        Self {
            team: team.into(),
            matches: 0,
            won: 0,
            loss: 0,
            tie: 0,
            points: 0,
            total_runs_scored: 0.0,
            total_overs_faced: 0.0,
            total_runs_conceded: 0.0,
            total_overs_bowled: 0.0,
            nrr: 0.0,
        }
    }

    pub fn has_rate_data(&self) -> bool {
        self.total_overs_faced > 0.0 && self.total_overs_bowled > 0.0
    }
}

/// Diagnostic for a match record that was rejected and skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedMatch {
    /// Position of the record in its input sequence
    pub index: usize,
    pub teams: Vec<TeamId>,
    pub group: Option<String>,
    pub error: MatchError,
}

impl SkippedMatch {
    pub fn new(index: usize, teams: Vec<TeamId>, error: MatchError) -> Self {
        Self {
            index,
            teams,
            group: None,
            error,
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}
