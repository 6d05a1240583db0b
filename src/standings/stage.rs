use std::collections::HashSet;

use log::{info, warn};

use crate::config::settings::StandingsSettings;
use crate::domain::MatchRecord;
use crate::errors::{MatchError, RosterError};

use super::table::StandingsTable;
use super::types::SkippedMatch;

/// A named group with its own independent table.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub table: StandingsTable,
}

/// One round of a tournament, split into one or more groups.
///
/// A match is routed to the group holding its first listed team; the group's
/// table then rejects it if the opponent belongs elsewhere.
#[derive(Debug, Clone)]
pub struct Stage {
    name: String,
    groups: Vec<Group>,
    skipped: Vec<SkippedMatch>,
}

impl Stage {
    pub fn new<'a, I>(name: impl Into<String>, groups: I, settings: StandingsSettings) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (&'a str, &'a [String])>,
    {
        let mut seen = HashSet::new();
        let mut built = Vec::new();

        for (group_name, teams) in groups {
            for team in teams {
                if !seen.insert(team.as_str()) {
                    return Err(RosterError::DuplicateTeam(team.clone()));
                }
            }
            built.push(Group {
                name: group_name.to_string(),
                table: StandingsTable::initialize(teams.iter().cloned(), settings)?,
            });
        }

        if built.is_empty() {
            return Err(RosterError::Empty);
        }

        Ok(Self {
            name: name.into(),
            groups: built,
            skipped: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn skipped(&self) -> &[SkippedMatch] {
        &self.skipped
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    fn route(&self, record: &MatchRecord) -> Result<usize, MatchError> {
        let first = record
            .first_team()
            .ok_or_else(|| MatchError::MalformedMatch("no teams listed".to_string()))?;
        self.groups
            .iter()
            .position(|g| g.table.contains(first))
            .ok_or_else(|| MatchError::UnknownTeam(first.to_string()))
    }

    /// Route and fold one record. `index` is its position in the input.
    /// A skipped record is also kept on the stage for the report.
    pub fn ingest(&mut self, index: usize, record: &MatchRecord) -> Result<(), SkippedMatch> {
        let outcome = match self.route(record) {
            Ok(slot) => {
                let group = &mut self.groups[slot];
                group
                    .table
                    .fold(record)
                    .map_err(|error| SkippedMatch::new(index, record.teams.clone(), error).in_group(&group.name))
            }
            Err(error) => Err(SkippedMatch::new(index, record.teams.clone(), error)),
        };

        if let Err(skipped) = &outcome {
            warn!(
                "[{}] Skipping match #{} ({}): {}",
                self.name,
                index,
                record.describe(),
                skipped.error
            );
            self.skipped.push(skipped.clone());
        }
        outcome
    }

    /// Record a match that could not even be decoded.
    pub fn reject(&mut self, skipped: SkippedMatch) {
        warn!("[{}] Skipping match #{}: {}", self.name, skipped.index, skipped.error);
        self.skipped.push(skipped);
    }

    /// Derive NRR for every group and hand back the finished stage.
    pub fn finish(mut self) -> Self {
        for group in &mut self.groups {
            group.table.derive_rates();
        }
        info!(
            "[{}] Finished {} group(s), {} match(es) skipped",
            self.name,
            self.groups.len(),
            self.skipped.len()
        );
        self
    }
}
