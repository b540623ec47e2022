use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::reducers::{reduce_filters, reduce_panels, reduce_sort};
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes the current state and an action, returns the new state and the
/// effect the runtime should perform. No I/O happens here.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: &Action) -> (AppState, Effect) {
    let state = match reduce_filters(state, action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_sort(state, action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_panels(state, action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    debug!("REDUCER: Unhandled action {:?}", action);
    (state, Effect::None)
}
