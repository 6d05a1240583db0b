use serde::{Deserialize, Serialize};

/// How teams level on points and NRR are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Earlier in the roster ranks higher
    #[default]
    RosterOrder,
    /// Lexicographic by team name
    Alphabetical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsSettings {
    pub full_quota_overs: f64,
    pub points_for_win: u32,
    pub points_for_tie: u32,
    pub accumulate_rates_on_tie: bool,
    pub tie_break: TieBreak,
}

impl Default for StandingsSettings {
    fn default() -> Self {
        Self {
            full_quota_overs: 20.0,
            points_for_win: 2,
            points_for_tie: 1,
            accumulate_rates_on_tie: false,
            tie_break: TieBreak::RosterOrder,
        }
    }
}

impl StandingsSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.full_quota_overs.is_finite() || self.full_quota_overs <= 0.0 {
            anyhow::bail!(
                "full_quota_overs must be a positive number, got {}",
                self.full_quota_overs
            );
        }
        Ok(())
    }
}
