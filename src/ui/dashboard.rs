//! Request/response query layer over a loaded league.
//!
//! All tables are computed once at build time. Reports that fail for a team
//! are recorded and leave the other teams unaffected.

use crate::data_fetcher::League;
use crate::data_fetcher::models::{StandingsRow, TeamId, WeeklyAverage};
use crate::data_fetcher::processors::extract_team_scores;
use crate::error::AppError;
use crate::ui::charts::TeamCharts;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// A team whose report could not be produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamFailure {
    pub team: TeamId,
    pub reason: String,
}

#[derive(Debug)]
pub struct Dashboard {
    league: League,
    averages: Vec<WeeklyAverage>,
    standings: Vec<StandingsRow>,
    reports: BTreeMap<TeamId, TeamCharts>,
    failures: Vec<TeamFailure>,
}

impl Dashboard {
    #[instrument(skip(league))]
    pub fn build(league: League, season_length: u32) -> Self {
        let averages = league.weekly_averages();
        let standings = league.standings(season_length);

        let mut reports = BTreeMap::new();
        let mut failures = Vec::new();
        for team in league.team_ids() {
            match charts_for(&league, &averages, team) {
                Ok(charts) => {
                    reports.insert(team, charts);
                }
                Err(e) => {
                    warn!("No report for team {team}: {e}");
                    failures.push(TeamFailure {
                        team,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Dashboard ready: {} team reports, {} failures",
            reports.len(),
            failures.len()
        );

        Self {
            league,
            averages,
            standings,
            reports,
            failures,
        }
    }

    /// Chart payloads for one team.
    ///
    /// Unknown ids and teams without games yield `TeamNotFound`; a report that
    /// failed at build time is recomputed so the caller sees the actual error.
    pub fn query(&self, team: TeamId) -> Result<TeamCharts, AppError> {
        match self.reports.get(&team) {
            Some(charts) => Ok(charts.clone()),
            None => charts_for(&self.league, &self.averages, team),
        }
    }

    pub fn standings(&self) -> &[StandingsRow] {
        &self.standings
    }

    pub fn failures(&self) -> &[TeamFailure] {
        &self.failures
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    /// Teams that have a report, ascending by id.
    pub fn available_teams(&self) -> Vec<TeamId> {
        self.reports.keys().copied().collect()
    }
}

fn charts_for(
    league: &League,
    averages: &[WeeklyAverage],
    team: TeamId,
) -> Result<TeamCharts, AppError> {
    let name = league.team_name(team)?;
    let records = extract_team_scores(team, league.games(), averages)?;
    Ok(TeamCharts::from_records(team, name, &records))
}
