use log::debug;

use super::models::{MatchRecord, ScoreRecord, TIE_MARKER};
use crate::errors::MatchError;

/// One innings: runs scored and overs faced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub runs: f64,
    pub overs: f64,
}

/// Position of a team inside `MatchResult::teams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Decisive { winner: Side, scores: [Score; 2] },
    Tie { scores: Option<[Score; 2]> },
    Walkover { winner: Side },
}

/// A match record that passed validation. Scores are indexed like `teams`.
///
/// Only `from_record` builds one, so two distinct teams and in-quota overs
/// always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    teams: [String; 2],
    outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultMarker {
    Normal,
    Walkover,
    NoResult,
}

impl MatchResult {
    pub fn team(&self, side: Side) -> &str {
        &self.teams[side.index()]
    }

    pub fn teams(&self) -> &[String; 2] {
        &self.teams
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Validate a raw record into the closed match shape.
    ///
    /// Team membership is not checked here; the standings table does that
    /// before calling in so that unknown teams are reported first.
    pub fn from_record(record: &MatchRecord, full_quota_overs: f64) -> Result<Self, MatchError> {
        let teams = parse_teams(record)?;
        let marker = parse_marker(record.result.as_deref())?;

        let winner = record
            .winner
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or_else(|| MatchError::MalformedMatch(format!("{}: no winner recorded", record.describe())))?;

        let outcome = if winner == TIE_MARKER {
            match marker {
                ResultMarker::Walkover => {
                    return Err(MatchError::MalformedMatch(format!(
                        "{}: a walkover needs a winner",
                        record.describe()
                    )));
                }
                ResultMarker::NoResult => Outcome::Tie { scores: None },
                ResultMarker::Normal => Outcome::Tie {
                    scores: parse_tie_scores(record, &teams, full_quota_overs)?,
                },
            }
        } else {
            let winner = side_of(&teams, winner).ok_or_else(|| {
                MatchError::MalformedMatch(format!(
                    "{}: winner {} did not play",
                    record.describe(),
                    winner
                ))
            })?;
            match marker {
                ResultMarker::Walkover | ResultMarker::NoResult => Outcome::Walkover { winner },
                ResultMarker::Normal => Outcome::Decisive {
                    winner,
                    scores: parse_required_scores(record, &teams, full_quota_overs)?,
                },
            }
        };

        Ok(Self { teams, outcome })
    }
}

fn parse_teams(record: &MatchRecord) -> Result<[String; 2], MatchError> {
    match record.teams.as_slice() {
        [first, second] if first == second => Err(MatchError::MalformedMatch(format!(
            "{} is listed against itself",
            first
        ))),
        [first, second] => Ok([first.clone(), second.clone()]),
        other => Err(MatchError::MalformedMatch(format!(
            "expected two teams, found {}",
            other.len()
        ))),
    }
}

fn parse_marker(result: Option<&str>) -> Result<ResultMarker, MatchError> {
    let Some(raw) = result else {
        return Ok(ResultMarker::Normal);
    };
    match raw.trim().to_lowercase().as_str() {
        "" | "normal" => Ok(ResultMarker::Normal),
        "walkover" => Ok(ResultMarker::Walkover),
        "no result" | "no_result" => Ok(ResultMarker::NoResult),
        other => Err(MatchError::MalformedMatch(format!(
            "unrecognised result marker: {}",
            other
        ))),
    }
}

fn side_of(teams: &[String; 2], name: &str) -> Option<Side> {
    if teams[0] == name {
        Some(Side::First)
    } else if teams[1] == name {
        Some(Side::Second)
    } else {
        None
    }
}

fn parse_required_scores(
    record: &MatchRecord,
    teams: &[String; 2],
    full_quota_overs: f64,
) -> Result<[Score; 2], MatchError> {
    // Presence of both entries is checked before any value
    let first = required_entry(record, &teams[0])?;
    let second = required_entry(record, &teams[1])?;
    Ok([
        check_score(&teams[0], first.0, first.1, full_quota_overs)?,
        check_score(&teams[1], second.0, second.1, full_quota_overs)?,
    ])
}

fn required_entry(record: &MatchRecord, team: &str) -> Result<(i64, f64), MatchError> {
    let missing = || MatchError::MissingScoreData {
        team: team.to_string(),
    };
    let entry = record.score_for(team).ok_or_else(missing)?;
    let runs = entry.runs.ok_or_else(missing)?;
    let overs = entry.overs.ok_or_else(missing)?;
    Ok((runs, overs))
}

fn parse_tie_scores(
    record: &MatchRecord,
    teams: &[String; 2],
    full_quota_overs: f64,
) -> Result<Option<[Score; 2]>, MatchError> {
    let complete = |team: &str| -> Option<(i64, f64)> {
        let ScoreRecord { runs, overs } = record.score_for(team)?;
        Some(((*runs)?, (*overs)?))
    };

    match (complete(&teams[0]), complete(&teams[1])) {
        (Some(first), Some(second)) => Ok(Some([
            check_score(&teams[0], first.0, first.1, full_quota_overs)?,
            check_score(&teams[1], second.0, second.1, full_quota_overs)?,
        ])),
        _ => {
            if record.scores.is_some() {
                debug!("Ignoring partial scores on tied match {}", record.describe());
            }
            Ok(None)
        }
    }
}

fn check_score(team: &str, runs: i64, overs: f64, full_quota_overs: f64) -> Result<Score, MatchError> {
    let invalid = |reason: String| MatchError::InvalidScore {
        team: team.to_string(),
        reason,
    };

    if runs < 0 {
        return Err(invalid(format!("negative runs {}", runs)));
    }
    if !overs.is_finite() || overs <= 0.0 {
        return Err(invalid(format!("overs must be positive, got {}", overs)));
    }
    if overs > full_quota_overs {
        return Err(invalid(format!(
            "{} overs exceeds the {} over quota",
            overs, full_quota_overs
        )));
    }

    Ok(Score {
        runs: runs as f64,
        overs,
    })
}
