pub mod render;
pub mod table;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::PageConfig;
use crate::dataset::DatasetStore;
use crate::page::{Action, Page, PageLayout, Runtime, SortColumn};

/// Filters given on the command line
///
/// Applied on top of `query` the way a visitor would click: each year and
/// league is added, the search text is typed, and each sort column is a
/// header click (so repeating a column flips its direction).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    pub query: Option<String>,
    pub years: Vec<String>,
    pub leagues: Vec<String>,
    pub search: Option<String>,
    pub sort: Vec<String>,
}

impl FilterArgs {
    pub fn actions(&self) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .years
            .iter()
            .map(|y| Action::AddYear(y.clone()))
            .chain(self.leagues.iter().map(|l| Action::AddLeague(l.clone())))
            .collect();
        if let Some(search) = &self.search {
            actions.push(Action::SetSearch(search.clone()));
        }
        actions.extend(self.sort.iter().map(|c| Action::SortBy(SortColumn::parse(c))));
        actions
    }

    /// Starting URL: the configured path plus the optional query
    pub fn start_url(&self, path: &str) -> String {
        match self.query.as_deref().map(|q| q.trim_start_matches('?')) {
            Some(query) if !query.is_empty() => format!("{}?{}", path, query),
            _ => path.to_string(),
        }
    }
}

/// Read rows from a JSON file, or from the payload block of an HTML page
pub fn load_dataset(data: &Path, html: bool, config: &PageConfig) -> Result<DatasetStore> {
    let content = fs::read_to_string(data)
        .with_context(|| format!("Failed to read dataset '{}'", data.display()))?;
    let store = if html {
        DatasetStore::from_html(&content, &config.payload_element_id)
    } else {
        DatasetStore::load(Some(&content))
    };
    Ok(store)
}

/// Boot a page runtime over the dataset and apply the command line filters
pub fn build_runtime(dataset: DatasetStore, filters: &FilterArgs, config: &PageConfig) -> Runtime {
    let url = filters.start_url(&config.path);
    let page = Page::new(
        PageLayout::default(),
        &url,
        &dataset.years(),
        &dataset.leagues(),
    );
    let mut runtime = Runtime::boot(dataset, page, config);
    for action in filters.actions() {
        runtime.dispatch(action);
    }
    runtime
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::lakers_bulls;

    #[test]
    fn test_actions_in_click_order() {
        let filters = FilterArgs {
            query: None,
            years: vec!["1996".to_string()],
            leagues: vec!["NBA".to_string()],
            search: Some("bu".to_string()),
            sort: vec!["year".to_string(), "year".to_string()],
        };
        assert_eq!(
            filters.actions(),
            vec![
                Action::AddYear("1996".to_string()),
                Action::AddLeague("NBA".to_string()),
                Action::SetSearch("bu".to_string()),
                Action::SortBy(SortColumn::Year),
                Action::SortBy(SortColumn::Year),
            ]
        );
    }

    #[test]
    fn test_start_url() {
        let mut filters = FilterArgs::default();
        assert_eq!(filters.start_url("/r.html"), "/r.html");

        filters.query = Some("?years=1996".to_string());
        assert_eq!(filters.start_url("/r.html"), "/r.html?years=1996");

        filters.query = Some("?".to_string());
        assert_eq!(filters.start_url("/r.html"), "/r.html");
    }

    #[test]
    fn test_build_runtime_combines_query_and_flags() {
        let filters = FilterArgs {
            query: Some("leagues=NBA".to_string()),
            search: Some("lak".to_string()),
            ..FilterArgs::default()
        };
        let runtime = build_runtime(
            DatasetStore::from_rows(lakers_bulls()),
            &filters,
            &PageConfig::default(),
        );
        assert_eq!(runtime.view().len(), 1);
        assert_eq!(runtime.page().url(), "/?leagues=NBA&search=lak");
    }

    #[test]
    fn test_load_dataset_missing_file_is_an_error() {
        let result = load_dataset(
            Path::new("/nonexistent/rankings.json"),
            false,
            &PageConfig::default(),
        );
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read dataset"));
    }
}
