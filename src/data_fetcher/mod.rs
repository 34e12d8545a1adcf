pub mod api;
pub mod league;
pub mod models;
pub mod processors;

pub use api::fetch_league_data;
pub use league::{League, TeamListing};
pub use models::{Game, Side, StandingsRow, Team, TeamId, TeamWeeklyRecord};
