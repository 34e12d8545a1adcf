use super::basic_info::TeamRecord;
use serde::{Deserialize, Serialize};

/// One participant of a scheduled matchup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupSideRecord {
    #[serde(rename = "teamId")]
    pub team_id: Option<i64>,
    #[serde(rename = "totalPoints")]
    pub total_points: Option<f64>,
}

/// One entry of the `schedule` array of the `mMatchup` view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: Option<u32>,
    #[serde(default)]
    pub home: Option<MatchupSideRecord>,
    #[serde(default)]
    pub away: Option<MatchupSideRecord>,
    #[serde(default)]
    pub winner: Option<String>,
}

/// Response of the league endpoint with `view=mMatchup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchupInfoResponse {
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    pub schedule: Vec<ScheduleRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchup_info_deserialization() {
        let json = r#"{
            "teams": [{ "id": 1 }, { "id": 2 }],
            "schedule": [
                {
                    "id": 0,
                    "matchupPeriodId": 1,
                    "home": { "teamId": 1, "totalPoints": 112.4, "rosterForCurrentScoringPeriod": {} },
                    "away": { "teamId": 2, "totalPoints": 98.06 },
                    "winner": "HOME"
                }
            ]
        }"#;

        let response: MatchupInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.teams.len(), 2);
        let record = &response.schedule[0];
        assert_eq!(record.matchup_period_id, Some(1));
        assert_eq!(record.home.as_ref().and_then(|h| h.team_id), Some(1));
        assert_eq!(record.away.as_ref().and_then(|a| a.total_points), Some(98.06));
        assert_eq!(record.winner.as_deref(), Some("HOME"));
    }

    #[test]
    fn test_bye_week_record_has_no_away_side() {
        let json = r#"{
            "schedule": [
                { "matchupPeriodId": 14, "home": { "teamId": 3, "totalPoints": 0.0 }, "winner": "UNDECIDED" }
            ]
        }"#;

        let response: MatchupInfoResponse = serde_json::from_str(json).unwrap();
        assert!(response.teams.is_empty());
        assert_eq!(response.schedule[0].away, None);
    }

    #[test]
    fn test_missing_schedule_is_rejected() {
        let result = serde_json::from_str::<MatchupInfoResponse>(r#"{ "teams": [] }"#);
        assert!(result.is_err());
    }
}
