//! View pipeline: rows + filters + sort → ordered visible rows.
//!
//! Pure functions only; the runtime calls `view` after every mutation.

use std::cmp::Ordering;

use crate::dataset::Row;

use super::state::{FilterState, SortState};
use super::types::{SortColumn, SortDirection};

/// Filter then sort
pub fn view<'a>(rows: &'a [Row], filters: &FilterState, sort: &SortState) -> Vec<&'a Row> {
    let mut visible = filter_rows(rows, filters);
    sort_rows(&mut visible, sort);
    visible
}

/// Keep rows matching every restricted dimension, preserving input order
pub fn filter_rows<'a>(rows: &'a [Row], filters: &FilterState) -> Vec<&'a Row> {
    let search = filters.search().to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, filters, &search))
        .collect()
}

fn row_matches(row: &Row, filters: &FilterState, search_lower: &str) -> bool {
    if !filters.years().is_empty() && !filters.years().contains(&row.year_key()) {
        return false;
    }
    if !filters.leagues().is_empty() && !filters.leagues().contains(&row.league) {
        return false;
    }
    if !search_lower.is_empty() && !row.team_name.to_lowercase().contains(search_lower) {
        return false;
    }
    true
}

/// Stable sort by the active column
///
/// Descending reverses the comparison rather than the list, so ties keep
/// their input order in both directions.
pub fn sort_rows(rows: &mut [&Row], sort: &SortState) {
    let column = sort.column();
    let direction = sort.direction();
    rows.sort_by(|a, b| {
        let ord = compare(column, a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Natural (ascending) order of two rows on a column
///
/// Text compares case-insensitively. Missing or NaN metrics order below any
/// number so the comparison stays total. Unknown columns compare equal.
pub fn compare(column: &SortColumn, a: &Row, b: &Row) -> Ordering {
    match column {
        SortColumn::Score => compare_metric(a.score, b.score),
        SortColumn::EraScore => compare_metric(a.era_score, b.era_score),
        SortColumn::LeagueScore => compare_metric(a.league_score, b.league_score),
        SortColumn::TeamName => compare_text(&a.team_name, &b.team_name),
        SortColumn::League => compare_text(&a.league, &b.league),
        SortColumn::Year => a.year.cmp(&b.year),
        SortColumn::Other(_) => Ordering::Equal,
    }
}

fn compare_metric(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.filter(|v| !v.is_nan());
    let b = b.filter(|v| !v.is_nan());
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
