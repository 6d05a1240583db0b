use std::collections::HashMap;

use log::debug;

use crate::config::settings::StandingsSettings;
use crate::domain::{MatchRecord, MatchResult, Outcome, Score, Side};
use crate::errors::{MatchError, RosterError};

use super::net_run_rate::{derive_rates, entitled_overs};
use super::ranking;
use super::types::{TeamId, TeamRecord};

/// Per-team statistics for one roster (a whole stage or one group).
///
/// Records are kept in roster order; `index` maps a team name to its slot.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsTable {
    records: Vec<TeamRecord>,
    index: HashMap<TeamId, usize>,
    settings: StandingsSettings,
}

impl StandingsTable {
    /// Build a zeroed table. Blank or duplicate names are rejected.
    pub fn initialize<I, S>(roster: I, settings: StandingsSettings) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<TeamId>,
    {
        let mut records = Vec::new();
        let mut index = HashMap::new();

        for team in roster {
            let team: TeamId = team.into();
            if team.trim().is_empty() {
                return Err(RosterError::BlankTeam);
            }
            if index.contains_key(&team) {
                return Err(RosterError::DuplicateTeam(team));
            }
            index.insert(team.clone(), records.len());
            records.push(TeamRecord::new(team));
        }

        if records.is_empty() {
            return Err(RosterError::Empty);
        }

        Ok(Self {
            records,
            index,
            settings,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, team: &str) -> bool {
        self.index.contains_key(team)
    }

    pub fn get(&self, team: &str) -> Option<&TeamRecord> {
        self.index.get(team).map(|&idx| &self.records[idx])
    }

    /// Records in roster order
    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.team.as_str())
    }

    /// Validate one raw record and fold it in. On error nothing is mutated.
    pub fn fold(&mut self, record: &MatchRecord) -> Result<(), MatchError> {
        if let Some(unknown) = record.teams.iter().find(|team| !self.contains(team)) {
            return Err(MatchError::UnknownTeam(unknown.clone()));
        }
        let result = MatchResult::from_record(record, self.settings.full_quota_overs)?;
        self.apply(&result);
        Ok(())
    }

    pub fn derive_rates(&mut self) {
        derive_rates(&mut self.records);
    }

    /// Team names in standing order. Reads `nrr` as last derived.
    pub fn rank(&self) -> Vec<TeamId> {
        ranking::rank(&self.records, self.settings.tie_break)
    }

    /// Records in standing order. Reads `nrr` as last derived.
    pub fn ranked_records(&self) -> Vec<&TeamRecord> {
        ranking::rank_indices(&self.records, self.settings.tie_break)
            .into_iter()
            .map(|idx| &self.records[idx])
            .collect()
    }

    fn slot(&self, team: &str) -> usize {
        self.index[team]
    }

    fn apply(&mut self, result: &MatchResult) {
        let [first, second] = result.teams();
        let slots = [self.slot(first), self.slot(second)];
        for &slot in &slots {
            self.records[slot].matches += 1;
        }

        match result.outcome() {
            Outcome::Tie { scores } => {
                debug!("Tie: {} vs {}", first, second);
                for &slot in &slots {
                    let record = &mut self.records[slot];
                    record.tie += 1;
                    record.points += self.settings.points_for_tie;
                }
                if let Some(scores) = scores.as_ref().filter(|_| self.settings.accumulate_rates_on_tie) {
                    self.accumulate_rates(slots, scores);
                }
            }
            Outcome::Walkover { winner } => {
                debug!("Walkover: {} awarded the match", result.team(*winner));
                self.award_win(slots, *winner);
            }
            Outcome::Decisive { winner, scores } => {
                debug!("Result: {} beat {}", result.team(*winner), result.team(winner.other()));
                self.award_win(slots, *winner);
                self.accumulate_rates(slots, scores);
            }
        }
    }

    fn award_win(&mut self, slots: [usize; 2], winner: Side) {
        let winner_slot = slots[winner.index()];
        let loser_slot = slots[winner.other().index()];

        self.records[winner_slot].won += 1;
        self.records[winner_slot].points += self.settings.points_for_win;
        self.records[loser_slot].loss += 1;
    }

    fn accumulate_rates(&mut self, slots: [usize; 2], scores: &[Score; 2]) {
        let quota = self.settings.full_quota_overs;
        let entitled = [
            entitled_overs(&scores[0], &scores[1], quota),
            entitled_overs(&scores[1], &scores[0], quota),
        ];

        for side in [Side::First, Side::Second] {
            let own = side.index();
            let opp = side.other().index();
            let record = &mut self.records[slots[own]];
            record.total_runs_scored += scores[own].runs;
            record.total_overs_faced += entitled[own];
            record.total_runs_conceded += scores[opp].runs;
            record.total_overs_bowled += entitled[opp];
        }
    }
}
