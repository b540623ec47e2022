use tokio::sync::broadcast;
use tracing::{debug, info, trace};

use crate::config::PageConfig;
use crate::dataset::{DatasetStore, Row};

use super::action::Action;
use super::channel::{EventChannel, RowsUpdated};
use super::document::Page;
use super::effects::Effect;
use super::events::{event_to_actions, PageEvent};
use super::reducer::reduce;
use super::render::{RenderOutcome, Renderer};
use super::state::AppState;
use super::sync::sync_widgets;
use super::url;
use super::view::view;

/// Page runtime - owns the state and applies actions to the page
///
/// The Runtime is responsible for:
/// - Holding the dataset, the page and the single `AppState`
/// - Dispatching actions through the reducer
/// - Executing the resulting effect (render, widget sync, notification)
///
/// Everything runs synchronously: `dispatch` returns once the page reflects
/// the new state and listeners have been notified.
pub struct Runtime {
    /// Current page state
    state: AppState,

    /// Immutable rows loaded at startup
    dataset: DatasetStore,

    /// The page the runtime renders into
    page: Page,

    /// Rows-updated notifications
    channel: EventChannel,

    renderer: Renderer,
}

impl Runtime {
    /// Start the page: restore filters from the URL, sync widgets, render
    pub fn boot(dataset: DatasetStore, page: Page, config: &PageConfig) -> Self {
        let state = AppState {
            filters: url::decode(page.history.query()),
            ..AppState::default()
        };
        info!(
            "RUNTIME: Booting with {} rows, filters {:?}",
            dataset.len(),
            state.filters
        );

        let mut runtime = Self {
            state,
            dataset,
            page,
            channel: EventChannel::new(config.event_capacity),
            renderer: Renderer::new(config),
        };
        sync_widgets(&mut runtime.page, &runtime.state);
        runtime.render();
        runtime
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn dataset(&self) -> &DatasetStore {
        &self.dataset
    }

    /// Listen for rows-updated notifications
    pub fn subscribe(&self) -> broadcast::Receiver<RowsUpdated> {
        self.channel.subscribe()
    }

    /// Rows currently visible, in display order
    pub fn view(&self) -> Vec<&Row> {
        view(self.dataset.rows(), &self.state.filters, &self.state.sort)
    }

    /// Dispatch an action through the reducer and apply its effect
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, &action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Resolve a page interaction and dispatch the resulting actions in order
    pub fn handle_event(&mut self, event: &PageEvent) {
        for action in event_to_actions(event, &self.state, &self.page) {
            self.dispatch(action);
        }
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::SyncWidgets => {
                sync_widgets(&mut self.page, &self.state);
            }
            Effect::Render => {
                self.render();
            }
        }
    }

    /// Render the view, sync widgets, then notify listeners
    fn render(&mut self) -> RenderOutcome {
        let rows = view(self.dataset.rows(), &self.state.filters, &self.state.sort);
        let outcome = self.renderer.render(&mut self.page, &rows, &self.state);
        sync_widgets(&mut self.page, &self.state);

        debug!("RUNTIME: Rendered {} rows", outcome.count);
        self.channel.publish(RowsUpdated {
            count: outcome.count,
        });
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::lakers_bulls;
    use crate::page::document::PageLayout;
    use crate::page::types::Dimension;

    fn runtime(url: &str) -> Runtime {
        let dataset = DatasetStore::from_rows(lakers_bulls());
        let page = Page::new(
            PageLayout::default(),
            url,
            &dataset.years(),
            &dataset.leagues(),
        );
        Runtime::boot(dataset, page, &PageConfig::default())
    }

    #[test]
    fn test_boot_restores_filters_from_url() {
        let runtime = runtime("/rankings.html?years=2001");
        assert!(runtime.state().filters.years().contains("2001"));
        assert_eq!(runtime.view().len(), 1);
        assert_eq!(runtime.page().results_count.as_deref(), Some("1 rows"));
        assert_eq!(
            runtime.page().panel(Dimension::Years).unwrap().checked_values(),
            vec!["2001".to_string()]
        );
    }

    #[test]
    fn test_boot_restores_search_box() {
        let runtime = runtime("/?search=bul");
        assert_eq!(runtime.page().search_input.as_deref(), Some("bul"));
        assert_eq!(runtime.view()[0].team_name, "Bulls");
    }

    #[test]
    fn test_panel_action_does_not_notify() {
        let mut runtime = runtime("/");
        let mut rx = runtime.subscribe();
        runtime.dispatch(Action::TogglePanel(Dimension::Leagues));

        assert!(runtime.page().panel(Dimension::Leagues).unwrap().open);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_filter_action_renders_and_notifies() {
        let mut runtime = runtime("/");
        let mut rx = runtime.subscribe();
        runtime.dispatch(Action::AddYear("1996".to_string()));

        assert_eq!(rx.try_recv().unwrap(), RowsUpdated { count: 1 });
        assert_eq!(runtime.page().url(), "/?years=1996");
    }
}
