use tracing::trace;

use crate::page::action::Action;
use crate::page::effects::Effect;
use crate::page::state::AppState;

/// Handle dropdown panel open/close
///
/// Panels never affect the rows, so these only ask for a widget sync.
pub fn reduce_panels(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let mut new_state = state;
    match action {
        Action::TogglePanel(dim) => new_state.panels.toggle(*dim),
        Action::ClosePanels => {
            if new_state.panels.open().is_none() {
                return Ok((new_state, Effect::None));
            }
            new_state.panels.close_all();
        }
        _ => return Err(new_state),
    }
    trace!("PANELS: open={:?}", new_state.panels.open());
    Ok((new_state, Effect::SyncWidgets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::types::Dimension;

    #[test]
    fn test_toggle_opens_panel() {
        let (state, effect) =
            reduce_panels(AppState::default(), &Action::TogglePanel(Dimension::Leagues)).unwrap();
        assert!(state.panels.is_open(Dimension::Leagues));
        assert_eq!(effect, Effect::SyncWidgets);
    }

    #[test]
    fn test_close_with_nothing_open_is_noop() {
        let (_, effect) = reduce_panels(AppState::default(), &Action::ClosePanels).unwrap();
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_close_with_open_panel_syncs() {
        let mut state = AppState::default();
        state.panels.toggle(Dimension::Years);
        let (state, effect) = reduce_panels(state, &Action::ClosePanels).unwrap();
        assert_eq!(state.panels.open(), None);
        assert_eq!(effect, Effect::SyncWidgets);
    }
}
