use anyhow::Result;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use crate::commands::{build_runtime, load_dataset, FilterArgs};
use crate::config::Config;
use crate::dataset::Row;
use crate::formatting::{count_label, format_header, format_metric, pad_left, pad_right};
use crate::page::SortColumn;

/// Width of the rank column
const RANK_COL_WIDTH: usize = 4;

/// Width of each metric column
const METRIC_COL_WIDTH: usize = 8;

/// Width of the year column
const YEAR_COL_WIDTH: usize = 4;

/// Minimum width of the team column
const MIN_TEAM_COL_WIDTH: usize = 4;

/// Plain-text ranking table in display order
///
/// The team and league columns grow to their widest entry (by display
/// width, so accented names stay aligned).
pub fn format_rankings_table(rows: &[&Row]) -> String {
    let team_width = rows
        .iter()
        .map(|r| r.team_name.width())
        .max()
        .unwrap_or(0)
        .max(MIN_TEAM_COL_WIDTH);
    let league_width = rows
        .iter()
        .map(|r| r.league.width())
        .chain(std::iter::once(SortColumn::League.header_label().width()))
        .max()
        .unwrap_or(0);

    let mut output = format_header(&format!("Rankings ({})", count_label(rows.len())), true);
    output.push('\n');

    let header = [
        pad_left("#", RANK_COL_WIDTH),
        pad_right(SortColumn::TeamName.header_label(), team_width),
        pad_left(SortColumn::Score.header_label(), METRIC_COL_WIDTH),
        pad_left(SortColumn::EraScore.header_label(), METRIC_COL_WIDTH),
        pad_left(SortColumn::LeagueScore.header_label(), METRIC_COL_WIDTH),
        pad_right(SortColumn::League.header_label(), league_width),
        pad_left(SortColumn::Year.header_label(), YEAR_COL_WIDTH),
    ]
    .join(" ");
    let rule = "-".repeat(header.width());
    output.push_str(header.trim_end());
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');

    for (i, row) in rows.iter().enumerate() {
        let line = [
            pad_left(&(i + 1).to_string(), RANK_COL_WIDTH),
            pad_right(&row.team_name, team_width),
            pad_left(&format_metric(row.score), METRIC_COL_WIDTH),
            pad_left(&format_metric(row.era_score), METRIC_COL_WIDTH),
            pad_left(&format_metric(row.league_score), METRIC_COL_WIDTH),
            pad_right(&row.league, league_width),
            pad_left(&row.year_key(), YEAR_COL_WIDTH),
        ]
        .join(" ");
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

pub fn run(data: &Path, html: bool, filters: &FilterArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(data, html, &config.page)?;
    let runtime = build_runtime(dataset, filters, &config.page);
    print!("{}", format_rankings_table(&runtime.view()));
    Ok(())
}
