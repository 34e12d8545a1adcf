//! The league aggregate: teams keyed by id and the ordered game table.

use crate::data_fetcher::models::{
    BasicInfoResponse, Game, MarginRow, MatchupInfoResponse, StandingsRow, Team, TeamId,
    TeamRecord, TeamWeeklyRecord, WeeklyAverage, WeeklyResults,
};
use crate::data_fetcher::processors::{
    build_game_table, build_team_map, extract_team_scores, game_from_record, margin_table,
    tabulate_standings, total_wins_per_team, weekly_average_table, weekly_win_loss,
};
use crate::error::AppError;
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// One row of the team listing: id, display name and abbreviation.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamListing {
    pub id: TeamId,
    pub name: String,
    pub abbrev: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct League {
    teams: BTreeMap<TeamId, Team>,
    games: Vec<Game>,
}

impl League {
    /// Builds the league from already-ingested parts, checking every game
    /// references a known team.
    pub fn new(teams: BTreeMap<TeamId, Team>, games: Vec<Game>) -> Result<Self, AppError> {
        for (index, game) in games.iter().enumerate() {
            for team_id in [game.team1, game.team2] {
                if !teams.contains_key(&team_id) {
                    return Err(AppError::unknown_team(index, team_id));
                }
            }
        }
        Ok(Self { teams, games })
    }

    /// Strict construction: the first malformed team or schedule record aborts.
    ///
    /// Teams are taken from the basic-info response. When it carries no teams
    /// the matchup response's team list is used instead.
    pub fn from_responses(
        basic: &BasicInfoResponse,
        matchups: &MatchupInfoResponse,
    ) -> Result<Self, AppError> {
        let teams = build_team_map(team_records(basic, matchups))?;
        let games = build_game_table(&matchups.schedule)?;
        let league = Self::new(teams, games)?;
        info!(
            "Loaded league with {} teams and {} games",
            league.teams.len(),
            league.games.len()
        );
        Ok(league)
    }

    /// Lenient construction: malformed schedule records and games referencing
    /// unknown teams are skipped and returned alongside the league.
    ///
    /// The team list itself must still be valid.
    pub fn from_responses_lenient(
        basic: &BasicInfoResponse,
        matchups: &MatchupInfoResponse,
    ) -> Result<(Self, Vec<AppError>), AppError> {
        let teams = build_team_map(team_records(basic, matchups))?;

        let mut games = Vec::with_capacity(matchups.schedule.len());
        let mut skipped = Vec::new();
        for (index, record) in matchups.schedule.iter().enumerate() {
            let checked = game_from_record(index, record).and_then(|game| {
                match [game.team1, game.team2]
                    .into_iter()
                    .find(|id| !teams.contains_key(id))
                {
                    Some(team_id) => Err(AppError::unknown_team(index, team_id)),
                    None => Ok(game),
                }
            });
            match checked {
                Ok(game) => games.push(game),
                Err(e) => {
                    warn!("Skipping schedule record {index}: {e}");
                    skipped.push(e);
                }
            }
        }

        info!(
            "Loaded league with {} teams and {} games ({} records skipped)",
            teams.len(),
            games.len(),
            skipped.len()
        );
        Ok((Self { teams, games }, skipped))
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// All team ids, ascending.
    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.keys().copied().collect()
    }

    pub fn team_name(&self, id: TeamId) -> Result<String, AppError> {
        self.teams
            .get(&id)
            .map(Team::display_name)
            .ok_or_else(|| AppError::team_not_found(id))
    }

    /// Display names keyed by id, as used by the standings table.
    pub fn team_names(&self) -> HashMap<TeamId, String> {
        self.teams
            .iter()
            .map(|(id, team)| (*id, team.display_name()))
            .collect()
    }

    pub fn teams_table(&self) -> Vec<TeamListing> {
        self.teams
            .values()
            .map(|team| TeamListing {
                id: team.id,
                name: team.display_name(),
                abbrev: team.abbreviation().to_string(),
            })
            .collect()
    }

    pub fn weekly_win_loss(&self) -> WeeklyResults {
        weekly_win_loss(&self.games)
    }

    pub fn total_wins_per_team(&self) -> BTreeMap<TeamId, u32> {
        total_wins_per_team(&self.weekly_win_loss())
    }

    /// Season win total of one team. Teams without any result are a lookup error.
    pub fn total_wins(&self, id: TeamId) -> Result<u32, AppError> {
        self.total_wins_per_team()
            .get(&id)
            .copied()
            .ok_or_else(|| AppError::team_not_found(id))
    }

    pub fn margins(&self) -> Vec<MarginRow> {
        margin_table(&self.games)
    }

    pub fn weekly_averages(&self) -> Vec<WeeklyAverage> {
        weekly_average_table(&self.games)
    }

    pub fn team_scores(&self, id: TeamId) -> Result<Vec<TeamWeeklyRecord>, AppError> {
        extract_team_scores(id, &self.games, &self.weekly_averages())
    }

    pub fn standings(&self, season_length: u32) -> Vec<StandingsRow> {
        tabulate_standings(&self.total_wins_per_team(), season_length, &self.team_names())
    }
}

fn team_records<'a>(
    basic: &'a BasicInfoResponse,
    matchups: &'a MatchupInfoResponse,
) -> &'a [TeamRecord] {
    if basic.teams.is_empty() {
        &matchups.teams
    } else {
        &basic.teams
    }
}
