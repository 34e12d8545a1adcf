//! Season standings from win totals.

use crate::constants::NO_NAME_PLACEHOLDER;
use crate::data_fetcher::models::{StandingsRow, TeamId};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Ranks teams by total wins, most wins first, ties broken by ascending team id.
///
/// Losses are `season_length - wins` and are not clamped: a team with more
/// recorded wins than the season length gets a negative loss count. Teams
/// without a display name get the "No Name" placeholder.
pub fn tabulate_standings(
    total_wins: &BTreeMap<TeamId, u32>,
    season_length: u32,
    names: &HashMap<TeamId, String>,
) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = total_wins
        .iter()
        .map(|(&team, &wins)| {
            let losses = i64::from(season_length) - i64::from(wins);
            if losses < 0 {
                warn!(
                    "Team {team} has {wins} wins in a {season_length}-game season; reporting {losses} losses"
                );
            }
            StandingsRow {
                team,
                name: names
                    .get(&team)
                    .cloned()
                    .unwrap_or_else(|| NO_NAME_PLACEHOLDER.to_string()),
                wins,
                losses,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.team.cmp(&b.team)));
    rows
}
