//! Active-filter chips.
//!
//! One chip per selected year, per selected league, and one for non-empty
//! search text. Each chip carries the attribute whose click removes exactly
//! that filter.

use super::action::Action;
use super::element::Element;
use super::state::FilterState;
use super::types::Dimension;

pub const REMOVE_YEAR_ATTR: &str = "data-remove-year";
pub const REMOVE_LEAGUE_ATTR: &str = "data-remove-league";
pub const CLEAR_SEARCH_ATTR: &str = "data-clear-search";

const CLOSE_GLYPH: &str = "×";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipKind {
    Value(Dimension, String),
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub kind: ChipKind,
}

impl Chip {
    /// Chip whose close button carries the attribute `name`
    pub fn from_button_attr(name: &str, value: &str) -> Option<Chip> {
        let kind = match name {
            REMOVE_YEAR_ATTR => ChipKind::Value(Dimension::Years, value.to_string()),
            REMOVE_LEAGUE_ATTR => ChipKind::Value(Dimension::Leagues, value.to_string()),
            CLEAR_SEARCH_ATTR => ChipKind::Search(value.to_string()),
            _ => return None,
        };
        Some(Chip { kind })
    }

    pub fn label(&self) -> String {
        match &self.kind {
            ChipKind::Value(_, value) => value.clone(),
            ChipKind::Search(text) => format!("“{}”", text),
        }
    }

    /// Action dispatched when the chip's close button is clicked
    pub fn remove_action(&self) -> Action {
        match &self.kind {
            ChipKind::Value(dim, value) => Action::toggle_value(*dim, value.clone(), false),
            ChipKind::Search(_) => Action::SetSearch(String::new()),
        }
    }

    pub fn to_element(&self) -> Element {
        let chip = Element::new("span").class("filter-chip");
        match &self.kind {
            ChipKind::Value(dim, value) => {
                let attr = remove_attr(*dim);
                chip.attr(format!("data-chip-{}", dim.noun()), value.as_str())
                    .text(self.label())
                    .child(
                        Element::new("button")
                            .attr("aria-label", format!("Remove {} {}", dim.noun(), value))
                            .attr(attr, value.as_str())
                            .text(CLOSE_GLYPH),
                    )
            }
            ChipKind::Search(_) => chip
                .attr("data-chip-search", "")
                .text(self.label())
                .child(
                    Element::new("button")
                        .attr("aria-label", "Clear search")
                        .attr(CLEAR_SEARCH_ATTR, "")
                        .text(CLOSE_GLYPH),
                ),
        }
    }
}

/// Attribute carrying the value a chip button removes
pub fn remove_attr(dim: Dimension) -> &'static str {
    match dim {
        Dimension::Years => REMOVE_YEAR_ATTR,
        Dimension::Leagues => REMOVE_LEAGUE_ATTR,
    }
}

/// Chips for the current filters: years, then leagues, then search
pub fn chips_for(filters: &FilterState) -> Vec<Chip> {
    let mut chips: Vec<Chip> = Dimension::all()
        .into_iter()
        .flat_map(|dim| {
            filters.values(dim).iter().map(move |value| Chip {
                kind: ChipKind::Value(dim, value.clone()),
            })
        })
        .collect();

    if !filters.search().is_empty() {
        chips.push(Chip {
            kind: ChipKind::Search(filters.search().to_string()),
        });
    }
    chips
}
