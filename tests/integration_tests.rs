use fantasy_stats::{
    config::Config,
    data_fetcher::{League, api::fetch_league_responses, fetch_league_data},
    error::AppError,
    testing_utils::TestDataBuilder,
    ui::Dashboard,
};
use fantasy_stats::data_fetcher::api::create_http_client_with_timeout;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

fn league_path() -> String {
    format!(
        "/seasons/{}/segments/0/leagues/{}",
        TestDataBuilder::YEAR,
        TestDataBuilder::LEAGUE_ID
    )
}

fn mock_config(server: &MockServer) -> Config {
    Config {
        api_base_url: server.uri(),
        http_timeout_seconds: 5,
        ..Config::for_league(TestDataBuilder::LEAGUE_ID, TestDataBuilder::YEAR)
    }
}

async fn mount_league(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(league_path()))
        .and(query_param_is_missing("view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::basic_info()))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(league_path()))
        .and(query_param("view", "mMatchup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::matchup_info()))
        .expect(1)
        .mount(server)
        .await;
}

/// Fetch, build and query the dashboard end to end against a mock league server
#[tokio::test]
async fn test_end_to_end_dashboard() {
    let server = MockServer::start().await;
    mount_league(&server).await;

    let config = mock_config(&server);
    let (basic, matchups) = fetch_league_data(&config).await.unwrap();
    let league = League::from_responses(&basic, &matchups).unwrap();
    let dashboard = Dashboard::build(league, config.season_length);

    let standings = dashboard.standings();
    assert_eq!(
        standings.iter().map(|row| row.team).collect::<Vec<_>>(),
        vec![1, 4, 2, 3]
    );
    assert_eq!(standings[1].name, "Toots Town Tacklers");
    assert_eq!(standings[0].losses, 13);

    let charts = dashboard.query(4).unwrap();
    assert_eq!(charts.team_name, "Toots Town Tacklers");
    assert_eq!(charts.luckiness.wins.len(), 2);
    // The unplayed fourth week is a loss on the luckiness chart but not a weekly score
    assert_eq!(charts.luckiness.losses.len(), 2);
    assert_eq!(charts.weekly_scores.weeks.len(), 3);
    assert!(dashboard.failures().is_empty());
}

#[tokio::test]
async fn test_weekly_averages_from_fetched_data() {
    let server = MockServer::start().await;
    mount_league(&server).await;

    let config = mock_config(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    let (basic, matchups) = fetch_league_responses(&client, &config).await.unwrap();
    let league = League::from_responses(&basic, &matchups).unwrap();

    let averages = league.weekly_averages();
    assert_eq!(averages.len(), 4);
    assert!((averages[0].average - 107.525).abs() < 1e-9);
    assert_eq!(averages[3].average, 0.0);

    let week1 = &league.team_scores(2).unwrap()[0];
    assert!((week1.score_vs_average - (98.2 - 107.525)).abs() < 1e-9);
    assert_eq!(week1.opponent, 1);
}

#[tokio::test]
async fn test_malformed_schedule_record_is_reported_with_index() {
    let server = MockServer::start().await;
    let mut matchups = TestDataBuilder::matchup_info();
    matchups.schedule[2].home = None;

    Mock::given(method("GET"))
        .and(path(league_path()))
        .and(query_param_is_missing("view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::basic_info()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(league_path()))
        .and(query_param("view", "mMatchup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&matchups))
        .mount(&server)
        .await;

    let (basic, matchups) = fetch_league_data(&mock_config(&server)).await.unwrap();

    let error = League::from_responses(&basic, &matchups).unwrap_err();
    assert!(matches!(
        error,
        AppError::DataFormat { index: 2, ref field } if field == "home"
    ));

    let (league, skipped) = League::from_responses_lenient(&basic, &matchups).unwrap();
    assert_eq!(league.games().len(), 7);
    assert_eq!(skipped.len(), 1);
}

#[tokio::test]
async fn test_unknown_league_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = fetch_league_data(&mock_config(&server)).await.unwrap_err();
    assert!(error.is_not_found());
    assert!(!error.is_retryable());
}

/// A saved config drives URL building against the mock server
#[tokio::test]
async fn test_saved_config_round_trip_drives_fetch() {
    let server = MockServer::start().await;
    mount_league(&server).await;

    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_path_str = config_path.to_string_lossy();
    let saved = Config {
        api_base_url: format!("{}/", server.uri()),
        ..mock_config(&server)
    };
    saved.save_to_path(&config_path_str).await.unwrap();

    let loaded = Config::load_from_path(&config_path_str).await.unwrap();
    assert_eq!(loaded.api_base_url, server.uri());

    let (basic, _) = fetch_league_data(&loaded).await.unwrap();
    assert_eq!(basic.teams.len(), 4);
}
