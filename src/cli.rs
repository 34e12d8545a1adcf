use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether the arguments only touch the config file and never fetch league data.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_league_id.is_some()
        || args.new_year.is_some()
        || args.new_api_base.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Fantasy football league stats for ESPN leagues
///
/// Fetches a league's teams and weekly matchups and prints the standings.
/// With --team, also prints that team's weekly scores against the league
/// average and how lucky its wins and losses were.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// League to fetch. Overrides the configured league for this run.
    #[arg(long = "league-id", help_heading = "League")]
    pub league_id: Option<u64>,

    /// Season year to fetch. Overrides the configured year for this run.
    #[arg(long = "year", short = 'y', help_heading = "League")]
    pub year: Option<i32>,

    /// Number of regular-season games used to derive losses from wins.
    #[arg(long = "season-length", help_heading = "League")]
    pub season_length: Option<u32>,

    /// Fail on the first malformed schedule record instead of skipping it.
    #[arg(long = "strict", help_heading = "League")]
    pub strict: bool,

    /// Show the weekly report and luckiness chart of one team.
    #[arg(long = "team", short = 't', value_name = "ID", help_heading = "Display Options")]
    pub team: Option<i64>,

    /// Print the standings and chart payloads as JSON instead of tables.
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Disable colours in the table output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Save a league id to the config file.
    #[arg(long = "set-league-id", value_name = "ID", help_heading = "Configuration")]
    pub new_league_id: Option<u64>,

    /// Save a season year to the config file.
    #[arg(long = "set-year", value_name = "YEAR", help_heading = "Configuration")]
    pub new_year: Option<i32>,

    /// Save an API base URL to the config file.
    #[arg(long = "set-api-base", value_name = "URL", help_heading = "Configuration")]
    pub new_api_base: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
