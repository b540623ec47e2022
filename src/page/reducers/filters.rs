use tracing::debug;

use crate::page::action::Action;
use crate::page::effects::Effect;
use crate::page::state::AppState;

/// Handle all filter actions
///
/// Returns `Err(state)` for actions that are not filter actions so the next
/// sub-reducer can take ownership.
pub fn reduce_filters(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let mut new_state = state;
    let filters = &mut new_state.filters;

    match action {
        Action::AddYear(year) => filters.add_year(year),
        Action::RemoveYear(year) => filters.remove_year(year),
        Action::AddLeague(league) => filters.add_league(league),
        Action::RemoveLeague(league) => filters.remove_league(league),
        Action::ReplaceYears(years) => filters.replace_years(years),
        Action::ReplaceLeagues(leagues) => filters.replace_leagues(leagues),
        Action::ClearDimension(dim) => filters.clear(*dim),
        Action::SetSearch(text) => filters.set_search(text),
        Action::ClearAll => {
            debug!("FILTERS: Reset requested");
            filters.clear_all();
        }
        _ => return Err(new_state),
    }

    debug!(
        "FILTERS: years={:?} leagues={:?} search={:?}",
        new_state.filters.years(),
        new_state.filters.leagues(),
        new_state.filters.search()
    );
    Ok((new_state, Effect::Render))
}
