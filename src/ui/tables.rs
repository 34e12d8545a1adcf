//! Plain-terminal rendering of the standings table and team reports.
//!
//! Rendering builds the whole output in a string buffer which is then written
//! in one `Print`.

use crate::constants::ui::{CONTENT_MARGIN, NAME_COLUMN_WIDTH, NUMBER_COLUMN_WIDTH};
use crate::data_fetcher::models::StandingsRow;
use crate::error::AppError;
use crate::ui::charts::TeamCharts;
use crate::ui::colors::{
    Palette, above_average_fg, below_average_fg, header_fg, loss_fg, subheader_fg, text_fg,
    win_fg,
};
use crate::ui::dashboard::TeamFailure;
use crossterm::{execute, style::Print};
use std::io::Write;
use unicode_width::UnicodeWidthChar;

/// Pads `text` to `width` terminal columns, truncating wide content.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn margin() -> String {
    " ".repeat(CONTENT_MARGIN)
}

fn number(value: impl ToString) -> String {
    format!("{:>width$}", value.to_string(), width = NUMBER_COLUMN_WIDTH)
}

fn points(value: f64) -> String {
    number(format!("{value:.2}"))
}

pub fn render_standings(rows: &[StandingsRow], palette: Palette) -> String {
    let mut buffer = String::new();
    let header = format!(
        "{}{}{}{}{}",
        margin(),
        pad_to_width("#", 4),
        pad_to_width("TEAM", NAME_COLUMN_WIDTH),
        number("W"),
        number("L"),
    );
    buffer.push_str(&palette.paint("STANDINGS", header_fg()));
    buffer.push('\n');
    buffer.push_str(&palette.paint(&header, subheader_fg()));
    buffer.push('\n');

    for (rank, row) in rows.iter().enumerate() {
        let line = format!(
            "{}{}{}{}{}",
            margin(),
            pad_to_width(&(rank + 1).to_string(), 4),
            pad_to_width(&row.name, NAME_COLUMN_WIDTH),
            number(row.wins),
            number(row.losses),
        );
        buffer.push_str(&palette.paint(&line, text_fg()));
        buffer.push('\n');
    }
    buffer
}

/// Per-week rows with a W/L marker, plus luckiness totals.
pub fn render_team_report(charts: &TeamCharts, palette: Palette) -> String {
    let mut buffer = String::new();
    buffer.push_str(&palette.paint(&charts.weekly_scores.title.to_uppercase(), header_fg()));
    buffer.push('\n');

    let header = format!(
        "{}{}{}{}{}{}{}",
        margin(),
        pad_to_width("WK", 4),
        pad_to_width("", 3),
        number("PTS"),
        number("OPP"),
        number("AVG"),
        number("+/-"),
    );
    buffer.push_str(&palette.paint(&header, subheader_fg()));
    buffer.push('\n');

    for week in &charts.weekly_scores.weeks {
        let (marker, marker_color) = if week.win {
            ("W", win_fg())
        } else {
            ("L", loss_fg())
        };
        let deviation = week.score - week.average;
        let deviation_color = if deviation >= 0.0 {
            above_average_fg()
        } else {
            below_average_fg()
        };

        buffer.push_str(&margin());
        buffer.push_str(&pad_to_width(&week.week.to_string(), 4));
        buffer.push_str(&palette.paint(&pad_to_width(marker, 3), marker_color));
        buffer.push_str(&points(week.score));
        buffer.push_str(&points(week.opponent_score));
        buffer.push_str(&points(week.average));
        buffer.push_str(&palette.paint(&number(format!("{deviation:+.2}")), deviation_color));
        buffer.push('\n');
    }

    let luckiness = &charts.luckiness;
    // Wins scored below the weekly average and losses scored above it
    let unlucky = luckiness
        .losses
        .iter()
        .filter(|p| p.points_above_average > 0.0)
        .count();
    let lucky = luckiness
        .wins
        .iter()
        .filter(|p| p.points_above_average < 0.0)
        .count();
    buffer.push('\n');
    buffer.push_str(&format!(
        "{}{}",
        margin(),
        palette.paint(
            &format!(
                "{} wins, {} losses; {lucky} wins below average, {unlucky} losses above average",
                luckiness.wins.len(),
                luckiness.losses.len()
            ),
            text_fg()
        )
    ));
    buffer.push('\n');
    buffer
}

pub fn render_failures(failures: &[TeamFailure], palette: Palette) -> String {
    let mut buffer = String::new();
    for failure in failures {
        buffer.push_str(&palette.paint(
            &format!("{}team {}: {}", margin(), failure.team, failure.reason),
            loss_fg(),
        ));
        buffer.push('\n');
    }
    buffer
}

/// Writes a rendered buffer to the terminal in one operation.
pub fn print_buffer(out: &mut impl Write, buffer: &str) -> Result<(), AppError> {
    execute!(out, Print(buffer))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::TeamWeeklyRecord;
    use unicode_width::UnicodeWidthStr;

    fn standings() -> Vec<StandingsRow> {
        vec![
            StandingsRow {
                team: 2,
                name: "Ertz First".to_string(),
                wins: 9,
                losses: 6,
            },
            StandingsRow {
                team: 1,
                name: "Björk Bombers".to_string(),
                wins: 4,
                losses: 11,
            },
        ]
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
        assert_eq!(pad_to_width("abcdef", 3), "abc");
        // Wide characters take two columns each
        assert_eq!(pad_to_width("日本", 5).width(), 5);
        assert_eq!(pad_to_width("日本語", 5), "日本 ");
    }

    #[test]
    fn test_render_standings_plain() {
        let output = render_standings(&standings(), Palette::plain());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "STANDINGS");
        assert!(lines[2].contains("Ertz First"));
        assert!(lines[2].trim_end().ends_with('6'));
        assert!(lines[3].starts_with("  2"));
        assert!(!output.contains('\x1b'));
        // Rows line up regardless of non-ASCII names
        assert_eq!(lines[2].width(), lines[3].width());
    }

    #[test]
    fn test_render_team_report() {
        let record = |week, score: f64, opponent_score: f64, average: f64| TeamWeeklyRecord {
            week,
            team: 1,
            score,
            opponent: 2,
            opponent_score,
            score_vs_average: score - average,
            opponent_vs_average: opponent_score - average,
            win: score > opponent_score,
            average,
        };
        let charts = TeamCharts::from_records(
            1,
            "Hail Mary".to_string(),
            &[
                record(1, 120.0, 100.0, 110.0),
                record(2, 115.0, 130.0, 105.0),
                record(3, 0.0, 0.0, 0.0),
            ],
        );

        let output = render_team_report(&charts, Palette::plain());
        assert!(output.starts_with("HAIL MARY WEEKLY SCORES"));
        assert!(output.contains("120.00"));
        assert!(output.contains("+10.00"));
        assert!(output.contains("1 wins, 2 losses; 0 wins below average"));
        assert!(output.contains("1 losses above average"));
        // Week 3 is unplayed and not listed
        assert!(!output.lines().any(|line| line.starts_with("  3 ")));
    }

    #[test]
    fn test_print_buffer() {
        let mut out = Vec::new();
        print_buffer(&mut out, "hello").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello");
    }
}
