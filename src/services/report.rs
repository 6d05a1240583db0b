use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::standings::{Group, SkippedMatch, Stage, StandingsTable, TeamRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    pub generated_at: DateTime<Utc>,
    pub stages: Vec<StageReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    pub name: String,
    pub groups: Vec<GroupReport>,
    pub skipped: Vec<SkippedReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    pub name: String,
    /// Team names in standing order
    pub ranking: Vec<String>,
    pub teams: BTreeMap<String, TeamSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub matches: u32,
    pub won: u32,
    pub loss: u32,
    pub tie: u32,
    pub points: u32,
    /// Full precision; rounding is up to the consumer
    pub nrr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedReport {
    pub index: usize,
    pub teams: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub kind: String,
    pub reason: String,
}

impl From<&TeamRecord> for TeamSummary {
    fn from(record: &TeamRecord) -> Self {
        Self {
            matches: record.matches,
            won: record.won,
            loss: record.loss,
            tie: record.tie,
            points: record.points,
            nrr: record.nrr,
        }
    }
}

impl From<&SkippedMatch> for SkippedReport {
    fn from(skipped: &SkippedMatch) -> Self {
        Self {
            index: skipped.index,
            teams: skipped.teams.clone(),
            group: skipped.group.clone(),
            kind: skipped.error.kind().to_string(),
            reason: skipped.error.to_string(),
        }
    }
}

impl GroupReport {
    pub fn from_table(name: &str, table: &StandingsTable) -> Self {
        Self {
            name: name.to_string(),
            ranking: table.rank(),
            teams: table
                .records()
                .iter()
                .map(|r| (r.team.clone(), TeamSummary::from(r)))
                .collect(),
        }
    }
}

impl From<&Group> for GroupReport {
    fn from(group: &Group) -> Self {
        GroupReport::from_table(&group.name, &group.table)
    }
}

impl StageReport {
    /// Build from a finished stage (rates already derived).
    pub fn from_stage(stage: &Stage) -> Self {
        Self {
            name: stage.name().to_string(),
            groups: stage.groups().iter().map(GroupReport::from).collect(),
            skipped: stage.skipped().iter().map(SkippedReport::from).collect(),
        }
    }
}

impl TournamentReport {
    pub fn new(stages: Vec<StageReport>) -> Self {
        Self {
            generated_at: Utc::now(),
            stages,
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.stages.iter().map(|s| s.skipped.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::StandingsSettings;
    use crate::domain::MatchRecord;

    #[test]
    fn test_group_report_matches_output_contract() {
        let mut table = StandingsTable::initialize(["A", "B"], StandingsSettings::default()).unwrap();
        table
            .fold(&MatchRecord::decisive(("A", 150, 18.0), ("B", 160, 20.0), "B"))
            .unwrap();
        table.derive_rates();

        let report = GroupReport::from_table("Overall", &table);

        assert_eq!(report.ranking, vec!["B", "A"]);
        assert_eq!(
            report.teams["A"],
            TeamSummary {
                matches: 1,
                won: 0,
                loss: 1,
                tie: 0,
                points: 0,
                nrr: -0.5,
            }
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["teams"]["B"]["points"], 2);
        assert_eq!(json["teams"]["B"]["nrr"], 0.5);
    }

    #[test]
    fn test_skipped_report_carries_kind_and_reason() {
        let skipped = SkippedMatch::new(
            7,
            vec!["A".to_string(), "Z".to_string()],
            crate::errors::MatchError::UnknownTeam("Z".to_string()),
        )
        .in_group("Group A");

        let report = SkippedReport::from(&skipped);

        assert_eq!(report.kind, "unknown_team");
        assert_eq!(report.reason, "unknown team: Z");
        assert_eq!(report.group.as_deref(), Some("Group A"));
    }
}
