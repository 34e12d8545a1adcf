//! URL building utilities for the league endpoints

/// View parameter selecting the schedule/matchup projection of a league.
pub const MATCHUP_VIEW: &str = "mMatchup";

/// Builds the league URL for a season. Without a `view` parameter the API
/// returns the league's basic info including its teams.
///
/// A trailing slash on `api_base` is ignored.
///
/// # Example
/// ```
/// use fantasy_stats::data_fetcher::api::build_league_url;
///
/// let url = build_league_url("https://api.example.com/ffl", 2021, 1117278137);
/// assert_eq!(url, "https://api.example.com/ffl/seasons/2021/segments/0/leagues/1117278137");
/// ```
pub fn build_league_url(api_base: &str, year: i32, league_id: u64) -> String {
    let base = api_base.trim_end_matches('/');
    format!("{base}/seasons/{year}/segments/0/leagues/{league_id}")
}

/// Builds the matchup URL: the league URL with `view=mMatchup`.
///
/// # Example
/// ```
/// use fantasy_stats::data_fetcher::api::build_matchup_url;
///
/// let url = build_matchup_url("https://api.example.com/ffl/", 2021, 42);
/// assert_eq!(url, "https://api.example.com/ffl/seasons/2021/segments/0/leagues/42?view=mMatchup");
/// ```
pub fn build_matchup_url(api_base: &str, year: i32, league_id: u64) -> String {
    format!(
        "{}?view={MATCHUP_VIEW}",
        build_league_url(api_base, year, league_id)
    )
}
