pub mod settings;
pub mod tournament;

pub use settings::{StandingsSettings, TieBreak};
pub use tournament::{GroupConfig, StageConfig, TournamentConfig};
