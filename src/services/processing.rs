use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::tournament::{StageConfig, TournamentConfig};
use crate::loader::{MatchFile, entry_teams};
use crate::services::report::{StageReport, TournamentReport};
use crate::standings::{SkippedMatch, Stage};

pub struct ProcessingService {
    config: TournamentConfig,
}

impl ProcessingService {
    pub fn new(config: TournamentConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<TournamentReport> {
        info!("=== Computing Points Tables ===");

        let mut stages = Vec::new();
        for stage_config in &self.config.stages {
            info!("Stage: {}", stage_config.name);
            let matches = MatchFile::load(&stage_config.matches)?;
            let report = self
                .process_stage(stage_config, &matches)
                .with_context(|| format!("Failed to process stage {}", stage_config.name))?;
            info!(
                "  → {} group(s), {} skipped record(s)",
                report.groups.len(),
                report.skipped.len()
            );
            stages.push(report);
        }

        info!("=== Points Tables Complete ===");
        Ok(TournamentReport::new(stages))
    }

    /// Process one stage from already loaded matches.
    pub fn process_stage(&self, stage_config: &StageConfig, matches: &MatchFile) -> Result<StageReport> {
        let mut stage = Stage::new(&stage_config.name, stage_config.group_rosters(), self.config.settings)?;

        let mut applied = 0;
        for (index, entry) in matches.entries.iter().enumerate() {
            match entry {
                Ok(record) => {
                    if stage.ingest(index, record).is_ok() {
                        applied += 1;
                    }
                }
                Err(error) => stage.reject(SkippedMatch::new(index, entry_teams(entry), error.clone())),
            }
        }
        debug!(
            "[{}] {} of {} record(s) applied",
            stage_config.name,
            applied,
            matches.entries.len()
        );

        let stage = stage.finish();
        Ok(StageReport::from_stage(&stage))
    }
}
