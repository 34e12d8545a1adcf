//! Serializable chart payloads for a single team's season.

use crate::constants::charts::LUCKINESS_AXIS_LIMIT;
use crate::data_fetcher::models::{TeamId, TeamWeeklyRecord};
use serde::Serialize;

/// A scatter point: the team's and its opponent's deviation from the week's average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckinessPoint {
    pub week: u32,
    pub points_above_average: f64,
    pub opponent_points_above_average: f64,
}

/// Wins and losses plotted as own deviation (x) against opponent deviation (y).
///
/// Points below the diagonal are games the team outscored its opponent relative
/// to the league; losses there were unlucky.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckinessChart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub wins: Vec<LuckinessPoint>,
    pub losses: Vec<LuckinessPoint>,
    /// The win/loss line `y = x`, sampled at integer points.
    pub diagonal: Vec<(i32, i32)>,
    pub axis_range: (i32, i32),
}

impl LuckinessChart {
    pub fn from_records(team_name: &str, records: &[TeamWeeklyRecord]) -> Self {
        let point = |record: &TeamWeeklyRecord| LuckinessPoint {
            week: record.week,
            points_above_average: record.score_vs_average,
            opponent_points_above_average: record.opponent_vs_average,
        };
        let (wins, losses): (Vec<_>, Vec<_>) = records.iter().partition(|record| record.win);

        Self {
            title: format!("{team_name} Wins and Losses"),
            x_axis_title: format!("{team_name} Points Above Average"),
            y_axis_title: "Opponent Points Above Average".to_string(),
            wins: wins.into_iter().map(point).collect(),
            losses: losses.into_iter().map(point).collect(),
            diagonal: (-LUCKINESS_AXIS_LIMIT..LUCKINESS_AXIS_LIMIT)
                .map(|v| (v, v))
                .collect(),
            axis_range: (-LUCKINESS_AXIS_LIMIT, LUCKINESS_AXIS_LIMIT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyScorePoint {
    pub week: u32,
    pub score: f64,
    pub opponent: TeamId,
    pub opponent_score: f64,
    pub average: f64,
    pub win: bool,
}

/// Per-week scores of played weeks only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyScoreChart {
    pub title: String,
    pub weeks: Vec<WeeklyScorePoint>,
}

impl WeeklyScoreChart {
    pub fn from_records(team_name: &str, records: &[TeamWeeklyRecord]) -> Self {
        let weeks = records
            .iter()
            .filter(|record| !record.is_unplayed())
            .map(|record| WeeklyScorePoint {
                week: record.week,
                score: record.score,
                opponent: record.opponent,
                opponent_score: record.opponent_score,
                average: record.average,
                win: record.win,
            })
            .collect();

        Self {
            title: format!("{team_name} Weekly Scores"),
            weeks,
        }
    }
}

/// Everything the dashboard shows for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCharts {
    pub team: TeamId,
    pub team_name: String,
    pub luckiness: LuckinessChart,
    pub weekly_scores: WeeklyScoreChart,
}

impl TeamCharts {
    pub fn from_records(team: TeamId, team_name: String, records: &[TeamWeeklyRecord]) -> Self {
        Self {
            team,
            luckiness: LuckinessChart::from_records(&team_name, records),
            weekly_scores: WeeklyScoreChart::from_records(&team_name, records),
            team_name,
        }
    }
}
