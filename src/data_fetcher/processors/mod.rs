pub mod ingest;
pub mod matchup_tables;
pub mod standings;
pub mod team_scores;

pub use ingest::{build_team_map, game_from_record, parse_winner};
pub use matchup_tables::{
    build_game_table, margin_table, total_wins_per_team,
    weekly_average_table, weekly_win_loss,
};
pub use standings::tabulate_standings;
pub use team_scores::extract_team_scores;
