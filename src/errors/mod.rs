use anyhow::Context as _;
use thiserror::Error;

/// Why a single match record was rejected. A rejected record never touches
/// the standings table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("unknown team: {0}")]
    UnknownTeam(String),
    #[error("malformed match: {0}")]
    MalformedMatch(String),
    #[error("missing score data for {team}")]
    MissingScoreData { team: String },
    #[error("invalid score for {team}: {reason}")]
    InvalidScore { team: String, reason: String },
}

impl MatchError {
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::UnknownTeam(_) => "unknown_team",
            MatchError::MalformedMatch(_) => "malformed_match",
            MatchError::MissingScoreData { .. } => "missing_score_data",
            MatchError::InvalidScore { .. } => "invalid_score",
        }
    }
}

/// Configuration errors raised while building a table from a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("roster is empty")]
    Empty,
    #[error("roster contains a blank team name")]
    BlankTeam,
    #[error("duplicate team in roster: {0}")]
    DuplicateTeam(String),
}

/// Add context to file read errors
pub fn read_context(path: &std::path::Path) -> String {
    format!("Failed to read {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &std::path::Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| read_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(data_type))
}
