use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits a custom log path into directory and file name.
fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

fn crate_filter() -> Result<EnvFilter, AppError> {
    let directive = "fantasy_stats=info"
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Resolves the log directory and file name.
///
/// `--log-file` wins, then `FANTASY_LOG_FILE`, then the config file, then the
/// default log directory. The config file is read directly since
/// `Config::load` may prompt on first run.
async fn resolve_log_location(args: &Args) -> Result<(String, String), AppError> {
    let mut config = Config::load_from_path(&Config::get_config_path())
        .await
        .unwrap_or_default();
    config.apply_env_overrides()?;

    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
    Ok(match custom_log_path {
        Some(custom_path) => split_log_path(custom_path),
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    })
}

/// Sets up logging for the application.
///
/// Logs always go to a daily rolling file; `--debug` adds a stdout layer.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args).await?;

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(crate_filter()?);

    if args.debug {
        tracing_subscriber::registry()
            .with(file_layer)
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(!args.plain)
                    .with_filter(crate_filter()?),
            )
            .init();
    } else {
        tracing_subscriber::registry().with(file_layer).init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_split_log_path() {
        assert_eq!(
            split_log_path("/var/log/fantasy/run.log"),
            ("/var/log/fantasy".to_string(), "run.log".to_string())
        );
        assert_eq!(
            split_log_path("run.log"),
            (".".to_string(), "run.log".to_string())
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_log_location_from_environment() {
        let temp_dir = tempdir().unwrap();
        let env_log = temp_dir.path().join("envlogs").join("from_env.log");
        unsafe {
            std::env::set_var(env_vars::LOG_FILE, &env_log);
        }

        let location = resolve_log_location(&Args::default()).await;
        unsafe {
            std::env::remove_var(env_vars::LOG_FILE);
        }

        assert_eq!(
            location.unwrap(),
            (
                temp_dir.path().join("envlogs").to_string_lossy().to_string(),
                "from_env.log".to_string()
            )
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_log_file_argument_overrides_environment() {
        unsafe {
            std::env::set_var(env_vars::LOG_FILE, "/env/logs/from_env.log");
        }
        let args = Args {
            log_file: Some("/cli/logs/run.log".to_string()),
            ..Args::default()
        };

        let location = resolve_log_location(&args).await;
        unsafe {
            std::env::remove_var(env_vars::LOG_FILE);
        }

        assert_eq!(
            location.unwrap(),
            ("/cli/logs".to_string(), "run.log".to_string())
        );
    }
}
