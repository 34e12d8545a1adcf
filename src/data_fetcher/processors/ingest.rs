//! Conversion of raw league records into validated domain values.

use crate::data_fetcher::models::{
    Game, MatchupSideRecord, ScheduleRecord, Side, Team, TeamId, TeamRecord,
};
use crate::error::AppError;
use std::collections::BTreeMap;
use tracing::debug;

/// Winner markers the source sends for games without a winning side.
const NO_WINNER_MARKERS: [&str; 2] = ["UNDECIDED", "TIE"];

/// Parses the declared winner of a matchup once, at ingestion.
///
/// `HOME`/`AWAY` (any case) map to a side. An absent winner and the source's
/// `UNDECIDED`/`TIE` markers mean no side won. Any other value is rejected.
pub fn parse_winner(index: usize, raw: Option<&str>) -> Result<Option<Side>, AppError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };

    if raw.eq_ignore_ascii_case("home") {
        Ok(Some(Side::Home))
    } else if raw.eq_ignore_ascii_case("away") {
        Ok(Some(Side::Away))
    } else if NO_WINNER_MARKERS
        .iter()
        .any(|marker| raw.eq_ignore_ascii_case(marker))
    {
        Ok(None)
    } else {
        Err(AppError::data_format(index, "winner"))
    }
}

/// Converts one team record, requiring only its id.
pub fn team_from_record(index: usize, record: &TeamRecord) -> Result<Team, AppError> {
    let id = record.id.ok_or_else(|| AppError::data_format(index, "id"))?;
    Ok(Team {
        id,
        location: record.location.clone(),
        nickname: record.nickname.clone(),
        name: record.name.clone(),
        abbrev: record.abbrev.clone(),
    })
}

/// Builds the identifier → team mapping. Duplicate identifiers are rejected.
pub fn build_team_map(records: &[TeamRecord]) -> Result<BTreeMap<TeamId, Team>, AppError> {
    let mut teams = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        let team = team_from_record(index, record)?;
        if teams.insert(team.id, team).is_some() {
            return Err(AppError::data_format(index, "id"));
        }
    }
    debug!("Ingested {} teams", teams.len());
    Ok(teams)
}

fn side_from_record(
    index: usize,
    side: Side,
    record: Option<&MatchupSideRecord>,
) -> Result<(TeamId, f64), AppError> {
    let record = record.ok_or_else(|| AppError::data_format(index, side.to_string()))?;
    let team_id = record
        .team_id
        .ok_or_else(|| AppError::data_format(index, format!("{side}.teamId")))?;
    let points = record
        .total_points
        .filter(|points| points.is_finite())
        .ok_or_else(|| AppError::data_format(index, format!("{side}.totalPoints")))?;
    Ok((team_id, points))
}

/// Converts one schedule record into a game row.
pub fn game_from_record(index: usize, record: &ScheduleRecord) -> Result<Game, AppError> {
    let week = record
        .matchup_period_id
        .ok_or_else(|| AppError::data_format(index, "matchupPeriodId"))?;
    let (team1, score1) = side_from_record(index, Side::Home, record.home.as_ref())?;
    let (team2, score2) = side_from_record(index, Side::Away, record.away.as_ref())?;
    let winner = parse_winner(index, record.winner.as_deref())?;

    Ok(Game {
        week,
        team1,
        score1,
        team2,
        score2,
        winner,
    })
}
