use crate::constants::{self, env_vars};
use crate::error::AppError;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_league_id;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing league and runtime settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// ESPN fantasy league identifier.
    pub league_id: u64,
    /// Season year of the league. Defaults to the current fantasy season.
    #[serde(default = "default_year")]
    pub year: i32,
    /// Base URL of the fantasy API, without the `/seasons/...` suffix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Number of regular-season games used to derive losses from wins.
    #[serde(default = "default_season_length")]
    pub season_length: u32,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

/// Fantasy seasons run from September into early January, so January and
/// February still belong to the previous year's season.
fn default_year() -> i32 {
    let now = Local::now();
    if now.month() < 3 {
        now.year() - 1
    } else {
        now.year()
    }
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_season_length() -> u32 {
    constants::DEFAULT_SEASON_LENGTH
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            league_id: 0,
            year: default_year(),
            api_base_url: default_api_base_url(),
            season_length: default_season_length(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Creates a configuration for the given league with default settings.
    pub fn for_league(league_id: u64, year: i32) -> Self {
        Config {
            league_id,
            year,
            ..Config::default()
        }
    }

    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts the user for a league id and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `FANTASY_LEAGUE_ID` - Override league id
    /// - `FANTASY_YEAR` - Override season year
    /// - `FANTASY_API_BASE` - Override API base URL
    /// - `FANTASY_SEASON_LENGTH` - Override season length
    /// - `FANTASY_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `FANTASY_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if std::env::var(env_vars::LEAGUE_ID).is_ok() {
            // Filled in by the environment overrides below
            Config::default()
        } else {
            let league_id = prompt_for_league_id().await?;
            let config = Config {
                league_id,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `FANTASY_*` environment variables on top of the current values.
    ///
    /// Numeric variables that fail to parse are reported as configuration errors
    /// rather than silently ignored.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Some(league_id) = parse_env::<u64>(env_vars::LEAGUE_ID)? {
            self.league_id = league_id;
        }
        if let Some(year) = parse_env::<i32>(env_vars::YEAR)? {
            self.year = year;
        }
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE) {
            self.api_base_url = api_base_url;
        }
        if let Some(season_length) = parse_env::<u32>(env_vars::SEASON_LENGTH)? {
            self.season_length = season_length;
        }
        if let Some(timeout) = parse_env::<u64>(env_vars::HTTP_TIMEOUT)? {
            self.http_timeout_seconds = timeout;
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("League:");
            println!("{} (season {})", config.league_id, config.year);
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("Season Length:");
            println!("{} games", config.season_length);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", constants::LOG_FILE_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the API base URL so URL building stays predictable.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config_error(format!("Environment variable {name} has invalid value '{value}'"))
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            for name in [
                env_vars::LEAGUE_ID,
                env_vars::YEAR,
                env_vars::API_BASE,
                env_vars::SEASON_LENGTH,
                env_vars::HTTP_TIMEOUT,
                env_vars::LOG_FILE,
            ] {
                std::env::remove_var(name);
            }
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
league_id = 1117278137
year = 2021
season_length = 14
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.league_id, 1117278137);
        assert_eq!(config.year, 2021);
        assert_eq!(config.season_length, 14);
        assert_eq!(config.api_base_url, constants::DEFAULT_API_BASE_URL);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[tokio::test]
    async fn test_config_missing_league_id_fails() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "year = 2021\n").await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            league_id: 42,
            year: 2022,
            api_base_url: "http://localhost:8080/ffl/".to_string(),
            season_length: 13,
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 5,
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config.league_id, 42);
        assert_eq!(loaded_config.year, 2022);
        assert_eq!(loaded_config.api_base_url, "http://localhost:8080/ffl");
        assert_eq!(loaded_config.season_length, 13);
        assert_eq!(loaded_config.http_timeout_seconds, 5);
        assert_eq!(
            loaded_config.log_file_path,
            Some("/custom/log/path".to_string())
        );
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let config = Config::for_league(7, 2021);

        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("league_id = 7"));
        assert!(!toml_string.contains("log_file_path"));

        let deserialized_config: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(config, deserialized_config);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("fantasy_stats"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("fantasy_stats"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::LEAGUE_ID, "555");
            std::env::set_var(env_vars::YEAR, "2020");
            std::env::set_var(env_vars::SEASON_LENGTH, "13");
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
        }

        let mut config = Config::for_league(1, 2021);
        config.apply_env_overrides().unwrap();

        assert_eq!(config.league_id, 555);
        assert_eq!(config.year, 2020);
        assert_eq!(config.season_length, 13);
        assert_eq!(config.log_file_path, Some("/env/log/path.log".to_string()));
        assert_eq!(config.api_base_url, constants::DEFAULT_API_BASE_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_numeric_environment_variable() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }

        let mut config = Config::for_league(1, 2021);
        let result = config.apply_env_overrides();
        assert!(matches!(result, Err(AppError::Config(_))));

        clear_env();
    }
}
