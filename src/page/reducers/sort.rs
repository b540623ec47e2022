use tracing::debug;

use crate::page::action::Action;
use crate::page::effects::Effect;
use crate::page::state::AppState;

/// Handle header clicks
pub fn reduce_sort(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SortBy(column) => {
            let mut new_state = state;
            new_state.sort.toggle_or_set(column.clone());
            debug!(
                "SORT: column={} direction={:?}",
                new_state.sort.column(),
                new_state.sort.direction()
            );
            Ok((new_state, Effect::Render))
        }
        _ => Err(state),
    }
}
