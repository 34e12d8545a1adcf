use crate::data_fetcher::models::{
    BasicInfoResponse, MatchupInfoResponse, MatchupSideRecord, ScheduleRecord, TeamRecord,
};

/// Test utilities for creating league fixtures
pub struct TestDataBuilder;

impl TestDataBuilder {
    pub const LEAGUE_ID: u64 = 1117278137;
    pub const YEAR: i32 = 2021;

    /// Creates a team with a location and nickname
    pub fn create_team(id: i64, location: &str, nickname: &str, abbrev: &str) -> TeamRecord {
        TeamRecord {
            id: Some(id),
            location: Some(location.to_string()),
            nickname: Some(nickname.to_string()),
            name: None,
            abbrev: Some(abbrev.to_string()),
        }
    }

    /// Creates a schedule entry. Use `0.0` points and `"UNDECIDED"` for unplayed weeks.
    pub fn create_matchup(
        week: u32,
        home: (i64, f64),
        away: (i64, f64),
        winner: &str,
    ) -> ScheduleRecord {
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

    /// Four teams, one of them sending only a combined name
    pub fn basic_info() -> BasicInfoResponse {
        BasicInfoResponse {
            id: Some(Self::LEAGUE_ID),
            season_id: Some(Self::YEAR),
            teams: vec![
                Self::create_team(1, "Hail", "Mary", "HM"),
                Self::create_team(2, "Ertz", "First", "EF"),
                Self::create_team(3, "Fumble", "Inn", "FI"),
                TeamRecord {
                    id: Some(4),
                    name: Some("Toots Town Tacklers".to_string()),
                    abbrev: Some("TTT".to_string()),
                    ..Default::default()
                },
            ],
        }
    }

    /// Three played weeks and one unplayed week.
    ///
    /// Wins: team 1 and team 4 two each, team 2 and team 3 one each.
    pub fn matchup_info() -> MatchupInfoResponse {
        MatchupInfoResponse {
            teams: Vec::new(),
            schedule: vec![
                Self::create_matchup(1, (1, 120.5), (2, 98.2), "HOME"),
                Self::create_matchup(1, (3, 101.0), (4, 110.4), "AWAY"),
                Self::create_matchup(2, (2, 130.0), (3, 88.8), "HOME"),
                Self::create_matchup(2, (4, 95.5), (1, 99.9), "AWAY"),
                Self::create_matchup(3, (1, 105.0), (3, 107.0), "AWAY"),
                Self::create_matchup(3, (2, 90.0), (4, 112.0), "AWAY"),
                Self::create_matchup(4, (3, 0.0), (2, 0.0), "UNDECIDED"),
                Self::create_matchup(4, (1, 0.0), (4, 0.0), "UNDECIDED"),
            ],
        }
    }

    pub fn league_responses() -> (BasicInfoResponse, MatchupInfoResponse) {
        (Self::basic_info(), Self::matchup_info())
    }
}
