use futures::future::try_join;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_league_url, build_matchup_url};
use crate::config::Config;
use crate::data_fetcher::models::{BasicInfoResponse, MatchupInfoResponse};
use crate::error::AppError;

/// Fetches the league's basic info (teams).
#[instrument(skip(client, config))]
pub async fn fetch_league_basic_info(
    client: &Client,
    config: &Config,
) -> Result<BasicInfoResponse, AppError> {
    let url = build_league_url(&config.api_base_url, config.year, config.league_id);
    let response: BasicInfoResponse = fetch(client, &url).await?;
    info!("Fetched basic info with {} teams", response.teams.len());
    Ok(response)
}

/// Fetches the league's matchup schedule.
#[instrument(skip(client, config))]
pub async fn fetch_league_matchup_info(
    client: &Client,
    config: &Config,
) -> Result<MatchupInfoResponse, AppError> {
    let url = build_matchup_url(&config.api_base_url, config.year, config.league_id);
    let response: MatchupInfoResponse = fetch(client, &url).await?;
    info!(
        "Fetched matchup info with {} schedule entries",
        response.schedule.len()
    );
    Ok(response)
}

/// Issues both league requests concurrently. The first failure aborts the pair.
#[instrument(skip(client, config), fields(league_id = config.league_id, year = config.year))]
pub async fn fetch_league_responses(
    client: &Client,
    config: &Config,
) -> Result<(BasicInfoResponse, MatchupInfoResponse), AppError> {
    try_join(
        fetch_league_basic_info(client, config),
        fetch_league_matchup_info(client, config),
    )
    .await
}

/// Creates a client from the configured timeout and fetches both league responses.
pub async fn fetch_league_data(
    config: &Config,
) -> Result<(BasicInfoResponse, MatchupInfoResponse), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    fetch_league_responses(&client, config).await
}
