pub mod net_run_rate;
pub mod ranking;
pub mod stage;
pub mod table;
pub mod types;

#[cfg(test)]
mod properties;

pub use net_run_rate::{derive_rates, entitled_overs, net_run_rate};
pub use ranking::rank;
pub use stage::{Group, Stage};
pub use table::StandingsTable;
pub use types::{SkippedMatch, TeamId, TeamRecord};
