use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Earliest season the fantasy API serves through the season-scoped endpoint.
const MIN_SEASON_YEAR: i32 = 2000;

/// Validates the configuration settings
///
/// # Validation Rules
/// - League id must be non-zero
/// - Season year must be plausible
/// - API base URL must be an http(s) URL
/// - Season length and HTTP timeout must be positive
/// - If log file path is provided, it cannot be empty and its parent directory must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.league_id == 0 {
        return Err(AppError::config_error("League id must be set"));
    }

    if config.year < MIN_SEASON_YEAR {
        return Err(AppError::config_error(format!(
            "Season year {} is out of range",
            config.year
        )));
    }

    let base = config.api_base_url.trim();
    if base.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if config.season_length == 0 {
        return Err(AppError::config_error("Season length must be at least 1"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
