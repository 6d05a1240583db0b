use crate::domain::Score;

use super::types::TeamRecord;

/// Overs credited to `own` for NRR purposes.
///
/// A side that finished behind and did not use its whole quota was bowled
/// out, so it is charged the full quota rather than the overs it lasted.
pub fn entitled_overs(own: &Score, opponent: &Score, full_quota_overs: f64) -> f64 {
    if own.runs < opponent.runs && own.overs < full_quota_overs {
        full_quota_overs
    } else {
        own.overs
    }
}

/// Net run rate from accumulated totals; zero when either denominator is empty.
pub fn net_run_rate(record: &TeamRecord) -> f64 {
    if !record.has_rate_data() {
        return 0.0;
    }
    let scored_per_over = record.total_runs_scored / record.total_overs_faced;
    let conceded_per_over = record.total_runs_conceded / record.total_overs_bowled;
    scored_per_over - conceded_per_over
}

pub fn derive_rates(records: &mut [TeamRecord]) {
    for record in records.iter_mut() {
        record.nrr = net_run_rate(record);
    }
}
