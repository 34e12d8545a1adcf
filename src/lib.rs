//! Fantasy football league statistics from the ESPN fantasy API.
//!
//! The library fetches a league's teams and matchup schedule, reshapes them
//! into game, win/loss, margin and weekly-average tables, and derives
//! standings and per-team chart payloads from them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fantasy_stats::config::Config;
//! use fantasy_stats::data_fetcher::{League, fetch_league_data};
//! use fantasy_stats::error::AppError;
//! use fantasy_stats::ui::Dashboard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::for_league(1117278137, 2021);
//!     let (basic, matchups) = fetch_league_data(&config).await?;
//!     let league = League::from_responses(&basic, &matchups)?;
//!
//!     let dashboard = Dashboard::build(league, config.season_length);
//!     for row in dashboard.standings() {
//!         println!("{} {}-{}", row.name, row.wins, row.losses);
//!     }
//!     let charts = dashboard.query(1)?;
//!     println!("{} wins plotted", charts.luckiness.wins.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Game, Side, StandingsRow, Team, TeamId, TeamWeeklyRecord};
pub use data_fetcher::{League, fetch_league_data};
pub use error::AppError;
pub use ui::{Dashboard, TeamCharts};
