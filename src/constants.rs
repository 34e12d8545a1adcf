//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and default configuration values.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Base URL of the ESPN fantasy football v3 API
pub const DEFAULT_API_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Regular season length used to derive losses from wins
pub const DEFAULT_SEASON_LENGTH: u32 = 15;

/// Display name used when a team has neither location nor nickname
pub const NO_NAME_PLACEHOLDER: &str = "No Name";

/// Name of the log file written under the log directory
pub const LOG_FILE_NAME: &str = "fantasy_stats.log";

/// Retry policy for the league API
pub mod retry {
    /// Number of extra attempts after the first failed request
    pub const MAX_RETRIES: u32 = 1;

    /// Delay before the retry in milliseconds
    pub const RETRY_DELAY_MS: u64 = 250;
}

/// Environment variable names that override config file values
pub mod env_vars {
    pub const LEAGUE_ID: &str = "FANTASY_LEAGUE_ID";
    pub const YEAR: &str = "FANTASY_YEAR";
    pub const API_BASE: &str = "FANTASY_API_BASE";
    pub const SEASON_LENGTH: &str = "FANTASY_SEASON_LENGTH";
    pub const HTTP_TIMEOUT: &str = "FANTASY_HTTP_TIMEOUT";
    pub const LOG_FILE: &str = "FANTASY_LOG_FILE";
}

/// Chart layout values for the luckiness scatter plot
pub mod charts {
    /// Half-width of the square axis range around zero
    pub const LUCKINESS_AXIS_LIMIT: i32 = 75;
}

/// Terminal report layout
pub mod ui {
    /// Width of the team name column in the standings table
    pub const NAME_COLUMN_WIDTH: usize = 32;

    /// Width of numeric columns
    pub const NUMBER_COLUMN_WIDTH: usize = 8;

    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;
}
