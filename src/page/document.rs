//! In-memory model of the ranking page (the DOM contract).
//!
//! Each region the engine reads or writes is a typed field. Optional regions
//! are `Option`s: a page variant without, say, the chip list simply has
//! `None` there and every feature touching it is skipped.

use super::element::Element;
use super::types::{Dimension, SortColumn, SortDirection};

/// Value of the native select's "no restriction" option
pub const ALL_OPTION: &str = "ALL";

/// Stable element ids of the page
pub mod ids {
    pub const TABLE_BODY: &str = "rankings-body";
    pub const RESULTS_COUNT: &str = "results-count";
    pub const ACTIVE_FILTERS: &str = "active-filters";
    pub const YEAR_SELECT: &str = "year-filter";
    pub const LEAGUE_SELECT: &str = "league-filter";
    pub const YEARS_TRIGGER: &str = "years-trigger";
    pub const LEAGUES_TRIGGER: &str = "leagues-trigger";
    pub const SEARCH_INPUT: &str = "team-search";
    pub const RESET: &str = "reset-filters";
}

/// Browser history restricted to what the engine may do: replace the
/// current entry
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    current: String,
}

impl History {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            current: url.into(),
        }
    }

    /// Current URL (path plus optional `?query`)
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn replace_state(&mut self, url: impl Into<String>) {
        self.current = url.into();
    }

    /// Path part of the current URL
    pub fn path(&self) -> &str {
        split_url(self.current()).0
    }

    /// Query part of the current URL, without `?`
    pub fn query(&self) -> &str {
        split_url(self.current()).1
    }
}

fn split_url(url: &str) -> (&str, &str) {
    let url = url.split('#').next().unwrap_or(url);
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Option of a native `<select multiple>`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// Native select for one dimension (`#year-filter`, `#league-filter`)
#[derive(Debug, Clone, PartialEq)]
pub struct SelectControl {
    pub options: Vec<SelectOption>,
}

impl SelectControl {
    /// Build with a leading `ALL` option followed by the given values
    pub fn new(values: &[String]) -> Self {
        let mut options = vec![SelectOption {
            value: ALL_OPTION.to_string(),
            selected: true,
        }];
        options.extend(values.iter().map(|v| SelectOption {
            value: v.clone(),
            selected: false,
        }));
        Self { options }
    }

    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }
}

/// Checkbox inside a custom dropdown panel (`[data-year-option]`)
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxOption {
    pub value: String,
    pub checked: bool,
}

/// Custom multi-select: a trigger button and a panel of checkboxes
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownPanel {
    pub trigger_label: String,
    pub open: bool,
    pub options: Vec<CheckboxOption>,
}

impl DropdownPanel {
    pub fn new(values: &[String]) -> Self {
        Self {
            trigger_label: String::new(),
            open: false,
            options: values
                .iter()
                .map(|v| CheckboxOption {
                    value: v.clone(),
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn option_values(&self) -> Vec<String> {
        self.options.iter().map(|o| o.value.clone()).collect()
    }

    pub fn checked_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value.clone())
            .collect()
    }

    /// `aria-expanded` value of the trigger
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// Sortable column header (`th[data-sort]`)
#[derive(Debug, Clone, PartialEq)]
pub struct SortHeader {
    pub column: SortColumn,
    pub marker: Option<SortDirection>,
}

/// Which optional regions a page variant carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub table_body: bool,
    pub results_count: bool,
    pub active_filters: bool,
    pub native_selects: bool,
    pub dropdown_panels: bool,
    pub search_input: bool,
    pub reset_control: bool,
    pub sort_headers: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            table_body: true,
            results_count: true,
            active_filters: true,
            native_selects: true,
            dropdown_panels: true,
            search_input: true,
            reset_control: true,
            sort_headers: true,
        }
    }
}

/// The ranking page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub history: History,
    pub table_body: Option<Vec<Element>>,
    pub results_count: Option<String>,
    pub active_filters: Option<Vec<Element>>,
    pub year_select: Option<SelectControl>,
    pub league_select: Option<SelectControl>,
    pub year_panel: Option<DropdownPanel>,
    pub league_panel: Option<DropdownPanel>,
    pub search_input: Option<String>,
    pub reset_control: bool,
    pub sort_headers: Vec<SortHeader>,
}

impl Page {
    /// Build a page at `url` with year and league options
    pub fn new(layout: PageLayout, url: &str, years: &[String], leagues: &[String]) -> Self {
        let sort_headers = if layout.sort_headers {
            SortColumn::table_columns()
                .into_iter()
                .map(|column| SortHeader {
                    column,
                    marker: None,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            history: History::new(url),
            table_body: layout.table_body.then(Vec::new),
            results_count: layout.results_count.then(String::new),
            active_filters: layout.active_filters.then(Vec::new),
            year_select: layout.native_selects.then(|| SelectControl::new(years)),
            league_select: layout.native_selects.then(|| SelectControl::new(leagues)),
            year_panel: layout.dropdown_panels.then(|| DropdownPanel::new(years)),
            league_panel: layout.dropdown_panels.then(|| DropdownPanel::new(leagues)),
            search_input: layout.search_input.then(String::new),
            reset_control: layout.reset_control,
            sort_headers,
        }
    }

    pub fn select(&self, dim: Dimension) -> Option<&SelectControl> {
        match dim {
            Dimension::Years => self.year_select.as_ref(),
            Dimension::Leagues => self.league_select.as_ref(),
        }
    }

    pub fn select_mut(&mut self, dim: Dimension) -> Option<&mut SelectControl> {
        match dim {
            Dimension::Years => self.year_select.as_mut(),
            Dimension::Leagues => self.league_select.as_mut(),
        }
    }

    pub fn panel(&self, dim: Dimension) -> Option<&DropdownPanel> {
        match dim {
            Dimension::Years => self.year_panel.as_ref(),
            Dimension::Leagues => self.league_panel.as_ref(),
        }
    }

    pub fn panel_mut(&mut self, dim: Dimension) -> Option<&mut DropdownPanel> {
        match dim {
            Dimension::Years => self.year_panel.as_mut(),
            Dimension::Leagues => self.league_panel.as_mut(),
        }
    }

    /// Current URL
    pub fn url(&self) -> &str {
        self.history.current()
    }

    /// HTML of the table body rows
    pub fn body_html(&self) -> Option<String> {
        self.table_body.as_ref().map(|rows| join_html(rows))
    }

    /// HTML of the chip list
    pub fn chips_html(&self) -> Option<String> {
        self.active_filters.as_ref().map(|chips| join_html(chips))
    }
}

fn join_html(elements: &[Element]) -> String {
    elements.iter().map(Element::to_html).collect::<Vec<_>>().join("\n")
}
