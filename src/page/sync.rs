use tracing::{debug, trace};

use crate::formatting::summary_label;

use super::document::{Page, ALL_OPTION};
use super::state::AppState;
use super::types::Dimension;

/// Project the state onto every redundant widget
///
/// Checkboxes, native selects, trigger labels, the search box and panel
/// open state are rewritten from scratch; none of them holds state of its own.
pub fn sync_widgets(page: &mut Page, state: &AppState) {
    for dim in Dimension::all() {
        let selected = state.filters.values(dim);

        match page.select_mut(dim) {
            Some(select) => {
                for option in select.options.iter_mut() {
                    option.selected = if option.value == ALL_OPTION {
                        selected.is_empty()
                    } else {
                        selected.contains(&option.value)
                    };
                }
            }
            None => trace!("SYNC: No native select for {}", dim.param()),
        }

        match page.panel_mut(dim) {
            Some(panel) => {
                for option in panel.options.iter_mut() {
                    option.checked = selected.contains(&option.value);
                }
                panel.trigger_label =
                    summary_label(dim.label(), selected.iter().map(String::as_str));
                panel.open = state.panels.is_open(dim);
            }
            None => trace!("SYNC: No dropdown panel for {}", dim.param()),
        }
    }

    if let Some(search) = page.search_input.as_mut() {
        if search.as_str() != state.filters.search() {
            *search = state.filters.search().to_string();
        }
    }

    debug!("SYNC: Widgets updated, open panel {:?}", state.panels.open());
}
