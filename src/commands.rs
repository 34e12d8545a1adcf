use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::models::{BasicInfoResponse, MatchupInfoResponse, StandingsRow, TeamId};
use crate::data_fetcher::{League, fetch_league_data};
use crate::error::AppError;
use crate::ui::{
    Dashboard, Palette, TeamCharts, TeamFailure, print_buffer, render_failures, render_standings,
    render_team_report,
};
use serde::Serialize;
use std::io::stdout;
use std::path::Path;
use tracing::{info, warn};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-league-id, --set-year,
/// --set-api-base, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let config = Config::load_from_path(&config_path)
        .await
        .unwrap_or_default();

    let config = apply_config_updates(config, args)?;
    if args.clear_log_file_path && args.new_log_file_path.is_none() {
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the `--set-*` and `--clear-log-file` updates to a config.
///
/// A config without a league id is never saved, so a first `--set-year` must
/// come with `--set-league-id`.
pub fn apply_config_updates(mut config: Config, args: &Args) -> Result<Config, AppError> {
    if let Some(league_id) = args.new_league_id {
        config.league_id = league_id;
    }
    if let Some(year) = args.new_year {
        config.year = year;
    }
    if let Some(api_base) = &args.new_api_base {
        config.api_base_url = api_base.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    if config.league_id == 0 {
        return Err(AppError::config_error(
            "No league id configured yet; pass --set-league-id together with other settings",
        ));
    }
    Ok(config)
}

/// Applies per-run command line overrides on top of a loaded config.
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(league_id) = args.league_id {
        config.league_id = league_id;
    }
    if let Some(year) = args.year {
        config.year = year;
    }
    if let Some(season_length) = args.season_length {
        config.season_length = season_length;
    }
}

/// Loads the config for a data run.
///
/// When a league id is given on the command line and no config file exists
/// yet, the defaults are used instead of prompting.
pub async fn resolve_config(args: &Args) -> Result<Config, AppError> {
    let mut config = match args.league_id {
        Some(league_id) if !Path::new(&Config::get_config_path()).exists() => {
            let mut config = Config {
                league_id,
                ..Config::default()
            };
            config.apply_env_overrides()?;
            config
        }
        _ => Config::load().await?,
    };

    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Hint shown when a strict load stops on malformed league data.
fn strict_failure_hint(error: &AppError, strict: bool) -> Option<&'static str> {
    (strict && error.is_data_error())
        .then_some("Run without --strict to skip malformed schedule records")
}

/// Builds the league either strictly or skipping malformed records.
pub fn load_league(
    basic: &BasicInfoResponse,
    matchups: &MatchupInfoResponse,
    strict: bool,
) -> Result<(League, Vec<AppError>), AppError> {
    if strict {
        Ok((League::from_responses(basic, matchups)?, Vec::new()))
    } else {
        League::from_responses_lenient(basic, matchups)
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    standings: &'a [StandingsRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    team: Option<TeamCharts>,
    failures: &'a [TeamFailure],
    skipped_records: Vec<String>,
}

/// Serializes the standings, the optional team charts and any isolated failures.
pub fn json_report(
    dashboard: &Dashboard,
    team: Option<TeamId>,
    skipped: &[AppError],
) -> Result<String, AppError> {
    let report = JsonReport {
        standings: dashboard.standings(),
        team: team.map(|id| dashboard.query(id)).transpose()?,
        failures: dashboard.failures(),
        skipped_records: skipped.iter().map(ToString::to_string).collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Renders the standings table, followed by the team report when requested.
pub fn text_report(
    dashboard: &Dashboard,
    team: Option<TeamId>,
    skipped: &[AppError],
    palette: Palette,
) -> Result<String, AppError> {
    let mut buffer = render_standings(dashboard.standings(), palette);

    if let Some(id) = team {
        let charts = dashboard.query(id)?;
        buffer.push('\n');
        buffer.push_str(&render_team_report(&charts, palette));
    }

    if !skipped.is_empty() {
        buffer.push('\n');
        buffer.push_str(&format!("{} schedule records skipped\n", skipped.len()));
    }
    if team.is_none() && !dashboard.failures().is_empty() {
        buffer.push('\n');
        buffer.push_str(&render_failures(dashboard.failures(), palette));
    }
    Ok(buffer)
}

/// Fetches the league, builds the dashboard and prints the requested report.
pub async fn handle_run_command(args: &Args) -> Result<(), AppError> {
    let config = resolve_config(args).await?;
    info!(
        "Fetching league {} for season {}",
        config.league_id, config.year
    );

    let (basic, matchups) = fetch_league_data(&config).await?;
    let (league, skipped) =
        load_league(&basic, &matchups, args.strict).inspect_err(|e| {
            if let Some(hint) = strict_failure_hint(e, args.strict) {
                warn!("Strict load failed: {e}");
                eprintln!("{hint}");
            }
        })?;
    if !skipped.is_empty() {
        warn!("{} schedule records were skipped", skipped.len());
    }

    let dashboard = Dashboard::build(league, config.season_length);

    let output = if args.json {
        json_report(&dashboard, args.team, &skipped)? + "\n"
    } else {
        text_report(&dashboard, args.team, &skipped, Palette::new(!args.plain))?
    };

    print_buffer(&mut stdout(), &output)
}
