use super::common::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// League-wide mean score for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAverage {
    pub week: u32,
    pub average: f64,
}

/// Signed point differential of one team in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRow {
    pub week: u32,
    pub team: TeamId,
    pub margin: f64,
}

/// Sparse team → week → result pivot. `1` marks a win, `0` anything else.
/// Weeks a team did not play are absent rather than zero.
pub type WeeklyResults = BTreeMap<TeamId, BTreeMap<u32, u32>>;

/// One week of a single team's season, oriented so the team is always in the "self" slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamWeeklyRecord {
    pub week: u32,
    pub team: TeamId,
    pub score: f64,
    pub opponent: TeamId,
    pub opponent_score: f64,
    pub score_vs_average: f64,
    pub opponent_vs_average: f64,
    pub win: bool,
    pub average: f64,
}

impl TeamWeeklyRecord {
    /// Weeks not yet played are sent with zero points.
    pub fn is_unplayed(&self) -> bool {
        self.score == 0.0
    }
}

/// A ranked standings line. Rank is implied by position in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: TeamId,
    pub name: String,
    pub wins: u32,
    /// Season length minus wins; negative when more wins were recorded than the season length.
    pub losses: i64,
}
