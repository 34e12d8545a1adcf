// src/main.rs
use clap::Parser;
use fantasy_stats::cli::{Args, is_config_operation};
use fantasy_stats::commands::{
    handle_config_update_command, handle_list_config_command, handle_run_command,
};
use fantasy_stats::error::AppError;
use fantasy_stats::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Keep the guard alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    handle_run_command(&args).await
}
