use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::settings::StandingsSettings;
use crate::errors::{with_parse_context, with_read_context};

/// Tournament description: rule settings plus the stages to compute.
///
/// Example:
/// ```json
/// {
///   "settings": { "full_quota_overs": 20.0 },
///   "stages": [
///     { "name": "Round 1", "matches": "matches.json",
///       "groups": [ { "name": "Overall", "teams": ["Elite Eagles", "Hologram"] } ] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default)]
    pub settings: StandingsSettings,
    pub stages: Vec<StageConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub name: String,
    /// Match file, relative to the tournament file
    pub matches: PathBuf,
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub teams: Vec<String>,
}

impl GroupConfig {
    pub fn new(name: &str, teams: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            teams: teams.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl StageConfig {
    /// Groups in the shape `Stage::new` takes
    pub fn group_rosters(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|g| (g.name.as_str(), g.teams.as_slice()))
    }
}

impl TournamentConfig {
    /// Load and validate a tournament file. Relative match paths are
    /// resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = with_read_context(fs::read_to_string(path), path)?;
        let mut config: TournamentConfig = with_parse_context(serde_json::from_str(&json), "tournament file")?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        for stage in &mut config.stages {
            if stage.matches.is_relative() {
                stage.matches = base_dir.join(&stage.matches);
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.settings.validate()?;

        if self.stages.is_empty() {
            anyhow::bail!("Tournament has no stages");
        }

        for stage in &self.stages {
            validate_stage(stage).with_context(|| format!("Invalid stage: {}", stage.name))?;
        }
        Ok(())
    }
}

fn validate_stage(stage: &StageConfig) -> Result<()> {
    if stage.groups.is_empty() {
        anyhow::bail!("Stage has no groups");
    }

    let mut seen = HashSet::new();
    for group in &stage.groups {
        if group.teams.is_empty() {
            anyhow::bail!("Group {} has no teams", group.name);
        }
        for team in &group.teams {
            if team.trim().is_empty() {
                anyhow::bail!("Group {} has a blank team name", group.name);
            }
            if !seen.insert(team.as_str()) {
                anyhow::bail!("Team {} is listed more than once", team);
            }
        }
    }
    Ok(())
}
