use std::cmp::Ordering;

use crate::config::settings::TieBreak;

use super::types::{TeamId, TeamRecord};

// Points first, then NRR, both descending.
fn compare_points(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_nrr(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.nrr.total_cmp(&a.nrr)
}

fn compare_names(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    a.team.cmp(&b.team)
}

/// Indices of `records` in standing order.
///
/// `records` is expected in roster order; with `TieBreak::RosterOrder` the
/// stable sort keeps that order for teams level on points and NRR.
pub fn rank_indices(records: &[TeamRecord], tie_break: TieBreak) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&i, &j| {
        let (a, b) = (&records[i], &records[j]);
        compare_points(a, b)
            .then_with(|| compare_nrr(a, b))
            .then_with(|| match tie_break {
                TieBreak::RosterOrder => i.cmp(&j),
                TieBreak::Alphabetical => compare_names(a, b),
            })
    });
    order
}

pub fn rank(records: &[TeamRecord], tie_break: TieBreak) -> Vec<TeamId> {
    rank_indices(records, tie_break)
        .into_iter()
        .map(|idx| records[idx].team.clone())
        .collect()
}
