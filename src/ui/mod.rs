pub mod charts;
pub mod colors;
pub mod dashboard;
pub mod tables;

pub use charts::{LuckinessChart, TeamCharts, WeeklyScoreChart};
pub use colors::Palette;
pub use dashboard::{Dashboard, TeamFailure};
pub use tables::{print_buffer, render_failures, render_standings, render_team_report};
