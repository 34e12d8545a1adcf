//! User interaction and prompts for configuration setup
//!
//! Handles first-run input collection when no config file exists.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the fantasy league id and parses it.
///
/// # Returns
/// * `Ok(u64)` - The league id
/// * `Err(AppError)` - Error reading from stdin or the input was not a number
pub async fn prompt_for_league_id() -> Result<u64, AppError> {
    println!("Please enter your ESPN fantasy league id: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    parse_league_id(&input)
}

fn parse_league_id(input: &str) -> Result<u64, AppError> {
    let trimmed = input.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| AppError::config_error(format!("'{trimmed}' is not a valid league id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_league_id() {
        assert_eq!(parse_league_id(" 1117278137\n").unwrap(), 1117278137);
        assert!(matches!(parse_league_id("my league"), Err(AppError::Config(_))));
        assert!(parse_league_id("").is_err());
    }
}
