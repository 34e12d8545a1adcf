use crate::constants::NO_NAME_PLACEHOLDER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Team identifier as assigned by the league. Stable for a season, not necessarily dense.
pub type TeamId = i64;

/// Slot a team occupies in a scheduled matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// A league team, sourced once from the basic-info response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub location: Option<String>,
    pub nickname: Option<String>,
    /// Combined name sent by newer seasons in place of location/nickname.
    pub name: Option<String>,
    pub abbrev: Option<String>,
}

impl Team {
    /// `"<location> <nickname>"`, using whichever parts are present.
    /// Falls back to the combined name, then to the "No Name" placeholder.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.location.as_deref(), self.nickname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if !parts.is_empty() {
            return parts.join(" ");
        }

        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(NO_NAME_PLACEHOLDER)
            .to_string()
    }

    pub fn abbreviation(&self) -> &str {
        self.abbrev.as_deref().unwrap_or("")
    }
}

/// One scheduled matchup. `team1`/`score1` is the home slot, `team2`/`score2` the away slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub week: u32,
    pub team1: TeamId,
    pub score1: f64,
    pub team2: TeamId,
    pub score2: f64,
    pub winner: Option<Side>,
}

impl Game {
    pub fn involves(&self, team: TeamId) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// Side the team plays on. A team listed in both slots counts as home.
    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.team1 == team {
            Some(Side::Home)
        } else if self.team2 == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn team_on(&self, side: Side) -> TeamId {
        match side {
            Side::Home => self.team1,
            Side::Away => self.team2,
        }
    }

    pub fn score_on(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.score1,
            Side::Away => self.score2,
        }
    }

    /// Whether the team on `side` is the declared winner.
    pub fn is_won_by(&self, side: Side) -> bool {
        self.winner == Some(side)
    }
}
