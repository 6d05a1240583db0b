//! Property tests for the standings table over generated rosters and
//! match sequences.

use proptest::prelude::*;

use crate::config::settings::{StandingsSettings, TieBreak};
use crate::domain::MatchRecord;
use crate::errors::MatchError;

use super::table::StandingsTable;
use super::types::TeamRecord;

const TEAMS: [&str; 4] = ["Elite Eagles", "Bombay Heats", "Hologram", "The Spartans"];

fn arb_roster() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Z][a-z]{0,10}", 1..12).prop_map(|set| set.into_iter().collect())
}

fn arb_innings() -> impl Strategy<Value = (i64, f64)> {
    (0i64..300, 0.1f64..=20.0)
}

/// Well-formed records between members of `TEAMS`.
fn arb_match() -> impl Strategy<Value = MatchRecord> {
    (0usize..4, 1usize..4, 0u8..3, any::<bool>(), arb_innings(), arb_innings()).prop_map(
        |(first, offset, kind, first_wins, innings_a, innings_b)| {
            let a = TEAMS[first];
            let b = TEAMS[(first + offset) % TEAMS.len()];
            let winner = if first_wins { a } else { b };
            match kind {
                0 => MatchRecord::decisive((a, innings_a.0, innings_a.1), (b, innings_b.0, innings_b.1), winner),
                1 => MatchRecord::walkover(a, b, winner),
                _ => MatchRecord::tie(a, b),
            }
        },
    )
}

fn arb_settings() -> impl Strategy<Value = StandingsSettings> {
    (any::<bool>(), any::<bool>()).prop_map(|(accumulate, alphabetical)| StandingsSettings {
        accumulate_rates_on_tie: accumulate,
        tie_break: if alphabetical {
            TieBreak::Alphabetical
        } else {
            TieBreak::RosterOrder
        },
        ..StandingsSettings::default()
    })
}

fn folded(records: &[MatchRecord], settings: StandingsSettings) -> StandingsTable {
    let mut table = StandingsTable::initialize(TEAMS, settings).unwrap();
    for record in records {
        if let Err(error) = table.fold(record) {
            panic!("well-formed record {} was skipped: {}", record.describe(), error);
        }
    }
    table.derive_rates();
    table
}

proptest! {
    #[test]
    fn prop_initialize_yields_one_zeroed_record_per_team(roster in arb_roster()) {
        let table = StandingsTable::initialize(roster.clone(), StandingsSettings::default()).unwrap();

        prop_assert_eq!(table.len(), roster.len());
        for team in &roster {
            let zeroed = TeamRecord::new(team.clone());
            prop_assert_eq!(table.get(team), Some(&zeroed));
        }
        prop_assert!(table.teams().all(|t| roster.iter().any(|r| r == t)));
    }

    #[test]
    fn prop_matches_equal_results(
        records in prop::collection::vec(arb_match(), 0..40),
        settings in arb_settings(),
    ) {
        let table = folded(&records, settings);

        let mut appearances = 0;
        for record in table.records() {
            prop_assert_eq!(record.matches, record.won + record.loss + record.tie);
            prop_assert_eq!(
                record.points,
                record.won * settings.points_for_win + record.tie * settings.points_for_tie
            );
            appearances += record.matches;
        }
        prop_assert_eq!(appearances as usize, records.len() * 2);
    }

    #[test]
    fn prop_nrr_is_always_finite(
        records in prop::collection::vec(arb_match(), 0..40),
        settings in arb_settings(),
    ) {
        let table = folded(&records, settings);

        for record in table.records() {
            prop_assert!(record.nrr.is_finite());
            if !record.has_rate_data() {
                prop_assert_eq!(record.nrr, 0.0);
            }
        }
    }

    #[test]
    fn prop_rank_is_a_total_order_on_points_then_nrr(
        records in prop::collection::vec(arb_match(), 0..40),
        settings in arb_settings(),
    ) {
        let table = folded(&records, settings);
        let ranked = table.ranked_records();

        prop_assert_eq!(ranked.len(), TEAMS.len());
        prop_assert_eq!(
            ranked.iter().map(|r| r.team.clone()).collect::<Vec<_>>(),
            table.rank()
        );
        for pair in ranked.windows(2) {
            let (above, below) = (pair[0], pair[1]);
            prop_assert!(above.points >= below.points);
            if above.points == below.points {
                prop_assert!(above.nrr >= below.nrr);
            }
        }
    }

    #[test]
    fn prop_unknown_team_leaves_state_unchanged(
        records in prop::collection::vec(arb_match(), 0..20),
        innings in arb_innings(),
    ) {
        let mut table = folded(&records, StandingsSettings::default());
        let before = table.clone();

        let stranger = MatchRecord::decisive((TEAMS[0], 100, 20.0), ("Royal Challengers Bhimavaram", innings.0, innings.1), TEAMS[0]);
        let result = table.fold(&stranger);

        prop_assert_eq!(result, Err(MatchError::UnknownTeam("Royal Challengers Bhimavaram".to_string())));
        prop_assert_eq!(table, before);
    }

    #[test]
    fn prop_decisive_match_awards_two_points_to_winner(
        first_wins in any::<bool>(),
        innings_a in arb_innings(),
        innings_b in arb_innings(),
    ) {
        let (a, b) = (TEAMS[0], TEAMS[1]);
        let winner = if first_wins { a } else { b };
        let loser = if first_wins { b } else { a };
        let table = folded(
            &[MatchRecord::decisive((a, innings_a.0, innings_a.1), (b, innings_b.0, innings_b.1), winner)],
            StandingsSettings::default(),
        );

        let w = table.get(winner).unwrap();
        let l = table.get(loser).unwrap();
        prop_assert_eq!((w.matches, w.won, w.points), (1, 1, 2));
        prop_assert_eq!((l.matches, l.loss, l.points), (1, 1, 0));
    }

    #[test]
    fn prop_bowled_out_side_is_charged_full_quota(
        runs in 0i64..299,
        margin in 1i64..100,
        overs in 0.1f64..19.9,
    ) {
        let (a, b) = (TEAMS[0], TEAMS[1]);
        let table = folded(
            &[MatchRecord::decisive((a, runs, overs), (b, runs + margin, 20.0), b)],
            StandingsSettings::default(),
        );

        prop_assert_eq!(table.get(a).unwrap().total_overs_faced, 20.0);
        prop_assert_eq!(table.get(b).unwrap().total_overs_bowled, 20.0);
    }
}
