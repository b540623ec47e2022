//! General test utilities for page tests.
//!
//! Builders for a booted runtime over fixture rows plus shorthand for the
//! page interactions the scenarios drive.

use crate::config::PageConfig;
use crate::dataset::{DatasetStore, Row};
use crate::fixtures::{lakers_bulls, sample_rows};

use super::document::{Page, PageLayout};
use super::events::{ElementRef, PageEvent};
use super::runtime::Runtime;

/// Path every test page is served from
pub const TEST_PATH: &str = "/rankings.html";

/// Boot a runtime over `rows` with the given layout and query
pub fn boot_with(rows: Vec<Row>, layout: PageLayout, query: &str) -> Runtime {
    let dataset = DatasetStore::from_rows(rows);
    let url = if query.is_empty() {
        TEST_PATH.to_string()
    } else {
        format!("{}?{}", TEST_PATH, query.trim_start_matches('?'))
    };
    let page = Page::new(layout, &url, &dataset.years(), &dataset.leagues());
    Runtime::boot(dataset, page, &PageConfig::default())
}

/// Runtime over the Lakers/Bulls rows with every page region present
pub fn lakers_bulls_runtime() -> Runtime {
    boot_with(lakers_bulls(), PageLayout::default(), "")
}

/// Runtime over the mixed sample rows, booted from `query`
pub fn sample_runtime(query: &str) -> Runtime {
    boot_with(sample_rows(), PageLayout::default(), query)
}

/// Team names of the visible rows, in display order
pub fn visible_names(runtime: &Runtime) -> Vec<String> {
    runtime.view().iter().map(|r| r.team_name.clone()).collect()
}

/// Team names as rendered in the table body
pub fn rendered_names(page: &Page) -> Vec<String> {
    page.table_body
        .as_ref()
        .map(|rows| {
            rows.iter()
                .filter_map(|row| row.child_elements().nth(1))
                .map(|cell| cell.text_content())
                .collect()
        })
        .unwrap_or_default()
}

/// Click on a single element with no relevant ancestors
pub fn click(target: ElementRef) -> PageEvent {
    PageEvent::Click { path: vec![target] }
}

/// Type into the team search box
pub fn type_search(text: &str) -> PageEvent {
    PageEvent::Input {
        target: ElementRef::with_id(super::document::ids::SEARCH_INPUT),
        value: text.to_string(),
    }
}
