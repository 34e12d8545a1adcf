pub mod basic_info;
pub mod common;
pub mod matchup_info;
pub mod tables;

pub use basic_info::{BasicInfoResponse, TeamRecord};
pub use common::{Game, Side, Team, TeamId};
pub use matchup_info::{MatchupInfoResponse, MatchupSideRecord, ScheduleRecord};
pub use tables::{MarginRow, StandingsRow, TeamWeeklyRecord, WeeklyAverage, WeeklyResults};
