use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Winner value marking a tied match
pub const TIE_MARKER: &str = "Tie";

/// Raw match record as it appears in a match file.
///
/// Every field is optional at this level so that a structurally incomplete
/// record still decodes and can be rejected with a precise reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<HashMap<String, ScoreRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(default)]
    pub runs: Option<i64>,
    #[serde(default)]
    pub overs: Option<f64>,
}

#[cfg(test)]
impl ScoreRecord {
    pub fn new(runs: i64, overs: f64) -> Self {
        Self {
            runs: Some(runs),
            overs: Some(overs),
        }
    }
}

#[cfg(test)]
impl MatchRecord {
    /// A decisive result with both innings recorded
    pub fn decisive(
        first: (&str, i64, f64),
        second: (&str, i64, f64),
        winner: &str,
    ) -> Self {
        Self {
            teams: vec![first.0.to_string(), second.0.to_string()],
            winner: Some(winner.to_string()),
            result: None,
            scores: Some(HashMap::from([
                (first.0.to_string(), ScoreRecord::new(first.1, first.2)),
                (second.0.to_string(), ScoreRecord::new(second.1, second.2)),
            ])),
        }
    }

    pub fn tie(first: &str, second: &str) -> Self {
        Self {
            teams: vec![first.to_string(), second.to_string()],
            winner: Some(TIE_MARKER.to_string()),
            result: None,
            scores: None,
        }
    }

    pub fn walkover(first: &str, second: &str, winner: &str) -> Self {
        Self {
            teams: vec![first.to_string(), second.to_string()],
            winner: Some(winner.to_string()),
            result: Some("walkover".to_string()),
            scores: None,
        }
    }

    pub fn with_scores(mut self, scores: &[(&str, i64, f64)]) -> Self {
        self.scores = Some(
            scores
                .iter()
                .map(|(team, runs, overs)| (team.to_string(), ScoreRecord::new(*runs, *overs)))
                .collect(),
        );
        self
    }
}

impl MatchRecord {
    pub fn first_team(&self) -> Option<&str> {
        self.teams.first().map(String::as_str)
    }

    pub fn score_for(&self, team: &str) -> Option<&ScoreRecord> {
        self.scores.as_ref().and_then(|scores| scores.get(team))
    }

    pub fn describe(&self) -> String {
        if self.teams.is_empty() {
            "<no teams>".to_string()
        } else {
            self.teams.join(" vs ")
        }
    }
}
