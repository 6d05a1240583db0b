pub mod match_result;
pub mod models;

pub use match_result::{MatchResult, Outcome, Score, Side};
pub use models::{MatchRecord, ScoreRecord, TIE_MARKER};
