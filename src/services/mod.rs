pub mod processing;
pub mod report;

pub use processing::ProcessingService;
pub use report::{GroupReport, SkippedReport, StageReport, TeamSummary, TournamentReport};
