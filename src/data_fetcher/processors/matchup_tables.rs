//! Reshapes the matchup schedule into game, win/loss, margin and average tables.

use super::ingest::game_from_record;
use crate::data_fetcher::models::{
    Game, MarginRow, ScheduleRecord, Side, TeamId, WeeklyAverage, WeeklyResults,
};
use crate::error::AppError;
use std::collections::BTreeMap;
use tracing::debug;

/// Builds one game row per schedule record, preserving input order.
///
/// Fails on the first malformed record with a `DataFormat` error naming the
/// record index and the missing field.
pub fn build_game_table(schedule: &[ScheduleRecord]) -> Result<Vec<Game>, AppError> {
    schedule
        .iter()
        .enumerate()
        .map(|(index, record)| game_from_record(index, record))
        .collect()
}

/// Builds the sparse weekly win/loss pivot.
///
/// Each participant of a game gets `1` for that week when its side is the
/// declared winner, otherwise `0`. Weeks a team did not play are absent.
/// If a team appears in two games of the same week the later game wins.
pub fn weekly_win_loss(games: &[Game]) -> WeeklyResults {
    let mut results = WeeklyResults::new();

    for game in games {
        for side in [Side::Home, Side::Away] {
            let won = u32::from(game.is_won_by(side));
            results
                .entry(game.team_on(side))
                .or_default()
                .insert(game.week, won);
        }
    }

    results
}

/// Sums the weekly pivot per team. Teams absent from the pivot get no entry.
pub fn total_wins_per_team(weekly: &WeeklyResults) -> BTreeMap<TeamId, u32> {
    weekly
        .iter()
        .map(|(team, weeks)| (*team, weeks.values().sum()))
        .collect()
}

/// Two margin rows per game: every team1 row in game order, followed by every team2 row.
pub fn margin_table(games: &[Game]) -> Vec<MarginRow> {
    let home_rows = games.iter().map(|game| MarginRow {
        week: game.week,
        team: game.team1,
        margin: game.score1 - game.score2,
    });
    let away_rows = games.iter().map(|game| MarginRow {
        week: game.week,
        team: game.team2,
        margin: game.score2 - game.score1,
    });

    home_rows.chain(away_rows).collect()
}

/// Mean of every score cell of each week, both slots pooled, ascending by week.
///
/// Unplayed games contribute their zero scores.
pub fn weekly_average_table(games: &[Game]) -> Vec<WeeklyAverage> {
    let mut totals: BTreeMap<u32, (f64, u32)> = BTreeMap::new();

    for game in games {
        let (sum, count) = totals.entry(game.week).or_insert((0.0, 0));
        *sum += game.score1 + game.score2;
        *count += 2;
    }

    let averages: Vec<WeeklyAverage> = totals
        .into_iter()
        .map(|(week, (sum, count))| WeeklyAverage {
            week,
            average: sum / f64::from(count),
        })
        .collect();

    debug!("Computed league averages for {} weeks", averages.len());
    averages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::MatchupSideRecord;

    fn game(week: u32, team1: TeamId, score1: f64, team2: TeamId, score2: f64) -> Game {
        let winner = if score1 > score2 {
            Some(Side::Home)
        } else if score2 > score1 {
            Some(Side::Away)
        } else {
            None
        };
        Game {
            week,
            team1,
            score1,
            team2,
            score2,
            winner,
        }
    }

    fn record(week: u32, home: (i64, f64), away: (i64, f64), winner: &str) -> ScheduleRecord {
        ScheduleRecord {
            matchup_period_id: Some(week),
            home: Some(MatchupSideRecord {
                team_id: Some(home.0),
                total_points: Some(home.1),
            }),
            away: Some(MatchupSideRecord {
                team_id: Some(away.0),
                total_points: Some(away.1),
            }),
            winner: Some(winner.to_string()),
        }
    }

    fn sample_games() -> Vec<Game> {
        vec![
            game(1, 1, 110.0, 2, 90.0),
            game(1, 3, 80.0, 4, 100.0),
            game(2, 2, 95.5, 3, 120.0),
            game(2, 4, 70.0, 1, 130.0),
        ]
    }

    #[test]
    fn test_build_game_table_preserves_input() {
        let schedule = vec![
            record(2, (5, 101.2), (8, 99.9), "HOME"),
            record(1, (8, 0.0), (5, 0.0), "UNDECIDED"),
        ];

        let games = build_game_table(&schedule).unwrap();
        assert_eq!(games.len(), schedule.len());
        assert_eq!(games[0].week, 2);
        assert_eq!((games[0].team1, games[0].score1), (5, 101.2));
        assert_eq!((games[0].team2, games[0].score2), (8, 99.9));
        assert_eq!(games[0].winner, Some(Side::Home));
        assert_eq!(games[1].week, 1);
        assert_eq!(games[1].winner, None);
    }

    #[test]
    fn test_build_game_table_fails_on_malformed_record() {
        let mut schedule = vec![
            record(1, (1, 10.0), (2, 20.0), "AWAY"),
            record(1, (3, 10.0), (4, 20.0), "AWAY"),
        ];
        schedule[1].home = None;

        let error = build_game_table(&schedule).unwrap_err();
        assert!(matches!(
            error,
            AppError::DataFormat { index: 1, ref field } if field == "home"
        ));
    }

    #[test]
    fn test_weekly_win_loss() {
        let weekly = weekly_win_loss(&sample_games());

        assert_eq!(weekly[&1][&1], 1);
        assert_eq!(weekly[&1][&2], 1);
        assert_eq!(weekly[&2][&1], 0);
        assert_eq!(weekly[&2][&2], 0);
        assert_eq!(weekly[&4][&1], 1);
        assert_eq!(weekly[&4][&2], 0);
    }

    #[test]
    fn test_weekly_win_loss_is_sparse_for_byes() {
        let games = vec![game(1, 1, 100.0, 2, 90.0), game(2, 1, 80.0, 3, 85.0)];
        let weekly = weekly_win_loss(&games);

        assert!(!weekly[&2].contains_key(&2));
        assert!(!weekly[&3].contains_key(&1));
        assert_eq!(weekly[&1].len(), 2);
    }

    #[test]
    fn test_undecided_games_count_as_losses_for_both_teams() {
        let games = vec![game(5, 1, 0.0, 2, 0.0)];
        let weekly = weekly_win_loss(&games);
        assert_eq!(weekly[&1][&5], 0);
        assert_eq!(weekly[&2][&5], 0);
    }

    #[test]
    fn test_total_wins_matches_declared_winners() {
        let games = sample_games();
        let totals = total_wins_per_team(&weekly_win_loss(&games));

        for (team, wins) in &totals {
            let expected = games
                .iter()
                .filter(|g| g.side_of(*team).is_some_and(|side| g.is_won_by(side)))
                .count() as u32;
            assert_eq!(*wins, expected, "team {team}");
        }
        assert_eq!(totals[&1], 2);
        assert_eq!(totals[&2], 0);
    }

    #[test]
    fn test_total_wins_is_sparse() {
        let games = vec![game(1, 1, 100.0, 2, 90.0)];
        let totals = total_wins_per_team(&weekly_win_loss(&games));

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get(&2), Some(&0));
        // Team 3 never played, so it must be absent rather than present with zero wins
        assert!(!totals.contains_key(&3));
    }

    #[test]
    fn test_margin_table() {
        let games = sample_games();
        let margins = margin_table(&games);

        assert_eq!(margins.len(), 2 * games.len());
        let n = games.len();
        for (i, game) in games.iter().enumerate() {
            assert_eq!(margins[i].team, game.team1);
            assert_eq!(margins[n + i].team, game.team2);
            assert_eq!(margins[i].week, game.week);
            assert_eq!(margins[i].margin, -margins[n + i].margin);
        }
        assert_eq!(margins[0].margin, 20.0);
    }

    #[test]
    fn test_weekly_average_pools_both_columns() {
        let games = vec![game(3, 1, 10.0, 2, 20.0), game(3, 3, 30.0, 4, 40.0)];
        let averages = weekly_average_table(&games);
        assert_eq!(
            averages,
            vec![WeeklyAverage {
                week: 3,
                average: 25.0
            }]
        );
    }

    #[test]
    fn test_weekly_average_sorted_and_includes_unplayed_zeros() {
        let games = vec![
            game(2, 1, 0.0, 2, 0.0),
            game(1, 1, 100.0, 2, 50.0),
            game(2, 3, 60.0, 4, 40.0),
        ];
        let averages = weekly_average_table(&games);

        assert_eq!(averages.iter().map(|a| a.week).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(averages[0].average, 75.0);
        assert_eq!(averages[1].average, 25.0);
    }
}
