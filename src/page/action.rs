use super::types::{Dimension, SortColumn};

/// Page actions - like Redux actions
///
/// Every state change on the page happens through one of these. Actions are
/// produced by the event dispatch table (clicks, changes, input) and by the
/// command line front end.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Filter actions
    AddYear(String),
    RemoveYear(String),
    AddLeague(String),
    RemoveLeague(String),
    ReplaceYears(Vec<String>),
    ReplaceLeagues(Vec<String>),
    ClearDimension(Dimension),
    SetSearch(String),
    /// Reset button: every dimension and the search text
    ClearAll,

    // Sort actions
    /// Header click: flip direction on the active column, else switch column
    SortBy(SortColumn),

    // Dropdown panel actions (presentation only)
    TogglePanel(Dimension),
    ClosePanels,
}

impl Action {
    /// Add or remove a single value of a dimension
    pub fn toggle_value(dim: Dimension, value: String, selected: bool) -> Self {
        match (dim, selected) {
            (Dimension::Years, true) => Self::AddYear(value),
            (Dimension::Years, false) => Self::RemoveYear(value),
            (Dimension::Leagues, true) => Self::AddLeague(value),
            (Dimension::Leagues, false) => Self::RemoveLeague(value),
        }
    }

    /// Replace the whole set of a dimension
    pub fn replace(dim: Dimension, values: Vec<String>) -> Self {
        match dim {
            Dimension::Years => Self::ReplaceYears(values),
            Dimension::Leagues => Self::ReplaceLeagues(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_value_maps_to_named_actions() {
        assert_eq!(
            Action::toggle_value(Dimension::Years, "2001".to_string(), true),
            Action::AddYear("2001".to_string())
        );
        assert_eq!(
            Action::toggle_value(Dimension::Leagues, "NHL".to_string(), false),
            Action::RemoveLeague("NHL".to_string())
        );
    }
}
