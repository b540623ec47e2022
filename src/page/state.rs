use std::collections::BTreeSet;

use super::types::{Dimension, SortColumn, SortDirection};

/// Root page state - single source of truth
///
/// All state changes happen through the reducer. Widgets, chips and the URL
/// are projections of this value and never hold selection state themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub filters: FilterState,
    pub sort: SortState,
    pub panels: PanelState,
}

/// Active filter selection
///
/// An empty set means the dimension is unrestricted. Values are kept sorted,
/// which makes chips, trigger labels and the URL deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    years: BTreeSet<String>,
    leagues: BTreeSet<String>,
    search: String,
}

impl FilterState {
    pub fn years(&self) -> &BTreeSet<String> {
        &self.years
    }

    pub fn leagues(&self) -> &BTreeSet<String> {
        &self.leagues
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn values(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::Years => &self.years,
            Dimension::Leagues => &self.leagues,
        }
    }

    fn values_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::Years => &mut self.years,
            Dimension::Leagues => &mut self.leagues,
        }
    }

    /// True when nothing restricts the view
    pub fn is_unrestricted(&self) -> bool {
        self.years.is_empty() && self.leagues.is_empty() && self.search.is_empty()
    }

    /// Add a value; empty values are ignored
    pub fn add(&mut self, dim: Dimension, value: &str) {
        if !value.is_empty() {
            self.values_mut(dim).insert(value.to_string());
        }
    }

    pub fn remove(&mut self, dim: Dimension, value: &str) {
        self.values_mut(dim).remove(value);
    }

    /// Replace the whole set for a dimension; empty values are dropped
    pub fn replace<I, S>(&mut self, dim: Dimension, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.values_mut(dim);
        set.clear();
        set.extend(
            values
                .into_iter()
                .filter(|v| !v.as_ref().is_empty())
                .map(|v| v.as_ref().to_string()),
        );
    }

    pub fn clear(&mut self, dim: Dimension) {
        self.values_mut(dim).clear();
    }

    pub fn add_year(&mut self, year: &str) {
        self.add(Dimension::Years, year);
    }

    pub fn remove_year(&mut self, year: &str) {
        self.remove(Dimension::Years, year);
    }

    pub fn add_league(&mut self, league: &str) {
        self.add(Dimension::Leagues, league);
    }

    pub fn remove_league(&mut self, league: &str) {
        self.remove(Dimension::Leagues, league);
    }

    pub fn replace_years<I, S>(&mut self, years: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replace(Dimension::Years, years);
    }

    pub fn replace_leagues<I, S>(&mut self, leagues: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replace(Dimension::Leagues, leagues);
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Reset every dimension and the search text
    pub fn clear_all(&mut self) {
        self.years.clear();
        self.leagues.clear();
        self.search.clear();
    }
}

/// Active sort column and direction
///
/// Only `toggle_or_set` mutates it, so the toggle rule cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    column: SortColumn,
    direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Score,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn column(&self) -> &SortColumn {
        &self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Same column flips direction; a new column starts descending
    pub fn toggle_or_set(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flip();
        } else {
            self.column = column;
            self.direction = SortDirection::Descending;
        }
    }
}

/// Which custom dropdown panel is open (presentation only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    open: Option<Dimension>,
}

impl PanelState {
    pub fn open(&self) -> Option<Dimension> {
        self.open
    }

    pub fn is_open(&self, dim: Dimension) -> bool {
        self.open == Some(dim)
    }

    /// Open a closed panel (closing any other) or close an open one
    pub fn toggle(&mut self, dim: Dimension) {
        self.open = if self.is_open(dim) { None } else { Some(dim) };
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}
