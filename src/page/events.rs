//! Page interactions and the table mapping them to actions.
//!
//! Event sources never touch state. They describe what happened (which
//! element, which value) and `event_to_actions` turns that into zero or more
//! actions for the runtime to dispatch.

use std::collections::BTreeSet;

use tracing::trace;

use super::action::Action;
use super::chips::Chip;
use super::document::{ids, Page, ALL_OPTION};
use super::state::AppState;
use super::types::{Dimension, SortColumn};

pub const MULTI_SELECT_CLASS: &str = "multi-select";
pub const TRIGGER_CLASS: &str = "multi-trigger";
pub const YEAR_OPTION_ATTR: &str = "data-year-option";
pub const LEAGUE_OPTION_ATTR: &str = "data-league-option";
pub const SORT_ATTR: &str = "data-sort";

/// Snapshot of an element involved in an interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementRef {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
}

impl ElementRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: &str) -> Self {
        Self::new().id(id)
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Interaction on the page
///
/// `path` lists the click target followed by its ancestors, innermost first.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Click { path: Vec<ElementRef> },
    CheckboxChanged { target: ElementRef, checked: bool },
    SelectChanged { target: ElementRef, selected: Vec<String> },
    Input { target: ElementRef, value: String },
}

/// Resolve an interaction into the actions it triggers
pub fn event_to_actions(event: &PageEvent, state: &AppState, page: &Page) -> Vec<Action> {
    let actions = match event {
        PageEvent::Click { path } => click_actions(path, state, page),
        PageEvent::CheckboxChanged { target, checked } => checkbox_action(target, *checked)
            .into_iter()
            .collect(),
        PageEvent::SelectChanged { target, selected } => select_action(target, selected)
            .into_iter()
            .collect(),
        PageEvent::Input { target, value } => {
            if target.has_id(ids::SEARCH_INPUT) {
                vec![Action::SetSearch(value.clone())]
            } else {
                Vec::new()
            }
        }
    };
    trace!("ACTION: {:?} -> {:?}", event, actions);
    actions
}

fn click_actions(path: &[ElementRef], state: &AppState, page: &Page) -> Vec<Action> {
    let mut actions = Vec::new();

    // A trigger counts as inside its panel even without the container
    let inside_panel = path
        .iter()
        .any(|e| e.has_class(MULTI_SELECT_CLASS) || e.has_class(TRIGGER_CLASS));
    if !inside_panel && state.panels.open().is_some() {
        actions.push(Action::ClosePanels);
    }

    if let Some(action) = path
        .iter()
        .enumerate()
        .find_map(|(i, element)| click_target_action(element, &path[i + 1..], state, page))
    {
        actions.push(action);
    }
    actions
}

/// Action for a click on `element`, given the ancestors above it
fn click_target_action(
    element: &ElementRef,
    ancestors: &[ElementRef],
    state: &AppState,
    page: &Page,
) -> Option<Action> {
    if let Some(chip) = element
        .attrs
        .iter()
        .find_map(|(name, value)| Chip::from_button_attr(name, value))
    {
        return Some(chip.remove_action());
    }
    if element.has_class(TRIGGER_CLASS) {
        return trigger_dimension(element, ancestors).map(Action::TogglePanel);
    }
    if let Some(kind) = element.get_attr("data-action") {
        let dim = element.get_attr("data-target").and_then(Dimension::from_param)?;
        return match kind {
            "select-all" => Some(select_all(dim, state, page)),
            "clear-all" => Some(Action::ClearDimension(dim)),
            _ => None,
        };
    }
    if element.has_id(ids::RESET) {
        return Some(Action::ClearAll);
    }
    if let Some(column) = element.get_attr(SORT_ATTR).filter(|c| !c.is_empty()) {
        return Some(Action::SortBy(SortColumn::parse(column)));
    }
    None
}

/// Dimension of a trigger, from its id or its enclosing `.multi-select`
fn trigger_dimension(trigger: &ElementRef, ancestors: &[ElementRef]) -> Option<Dimension> {
    if trigger.has_id(ids::YEARS_TRIGGER) {
        return Some(Dimension::Years);
    }
    if trigger.has_id(ids::LEAGUES_TRIGGER) {
        return Some(Dimension::Leagues);
    }
    ancestors
        .iter()
        .find(|e| e.has_class(MULTI_SELECT_CLASS))
        .and_then(|e| e.get_attr("data-dimension"))
        .and_then(Dimension::from_param)
}

/// Current selection plus every option the dimension's panel offers
fn select_all(dim: Dimension, state: &AppState, page: &Page) -> Action {
    let offered = match (page.panel(dim), page.select(dim)) {
        (Some(panel), _) => panel.option_values(),
        (None, Some(select)) => select
            .options
            .iter()
            .filter(|o| o.value != ALL_OPTION)
            .map(|o| o.value.clone())
            .collect(),
        (None, None) => Vec::new(),
    };
    let values: BTreeSet<String> = state
        .filters
        .values(dim)
        .iter()
        .cloned()
        .chain(offered)
        .collect();
    Action::replace(dim, values.into_iter().collect())
}

fn checkbox_action(target: &ElementRef, checked: bool) -> Option<Action> {
    let dim = if target.get_attr(YEAR_OPTION_ATTR).is_some() {
        Dimension::Years
    } else if target.get_attr(LEAGUE_OPTION_ATTR).is_some() {
        Dimension::Leagues
    } else {
        return None;
    };
    let value = target.get_attr("value")?;
    Some(Action::toggle_value(dim, value.to_string(), checked))
}

fn select_action(target: &ElementRef, selected: &[String]) -> Option<Action> {
    let dim = if target.has_id(ids::YEAR_SELECT) {
        Dimension::Years
    } else if target.has_id(ids::LEAGUE_SELECT) {
        Dimension::Leagues
    } else {
        return None;
    };
    let values: Vec<String> = selected
        .iter()
        .filter(|v| v.as_str() != ALL_OPTION && !v.is_empty())
        .cloned()
        .collect();
    if values.is_empty() {
        Some(Action::ClearDimension(dim))
    } else {
        Some(Action::replace(dim, values))
    }
}
