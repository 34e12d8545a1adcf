//! Team-centric view of the game table, measured against the league average.

use crate::data_fetcher::models::{Game, TeamId, TeamWeeklyRecord, WeeklyAverage};
use crate::error::AppError;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Produces one record per game the team played, in game-table order.
///
/// The team of interest is always placed in the "self" slot: rows where it
/// played away have both the id and the score columns swapped together.
/// Each row is joined to its week's league average by week number.
///
/// # Errors
/// * `TeamNotFound` - the team does not appear in any game
/// * `WeekAverageNotFound` - a game's week has no entry in `averages`
#[instrument(skip(games, averages))]
pub fn extract_team_scores(
    team: TeamId,
    games: &[Game],
    averages: &[WeeklyAverage],
) -> Result<Vec<TeamWeeklyRecord>, AppError> {
    let average_by_week: HashMap<u32, f64> = averages
        .iter()
        .map(|avg| (avg.week, avg.average))
        .collect();

    let records = games
        .iter()
        .filter_map(|game| game.side_of(team).map(|side| (game, side)))
        .map(|(game, side)| {
            let average = *average_by_week
                .get(&game.week)
                .ok_or_else(|| AppError::week_average_not_found(game.week))?;
            let score = game.score_on(side);
            let opponent_score = game.score_on(side.opposite());

            Ok(TeamWeeklyRecord {
                week: game.week,
                team,
                score,
                opponent: game.team_on(side.opposite()),
                opponent_score,
                score_vs_average: score - average,
                opponent_vs_average: opponent_score - average,
                win: score > opponent_score,
                average,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    if records.is_empty() {
        return Err(AppError::team_not_found(team));
    }

    debug!("Extracted {} weekly records for team {team}", records.len());
    Ok(records)
}
