// Core modules
pub mod action;
pub mod channel;
pub mod chips;
pub mod document;
pub mod effects;
pub mod element;
pub mod events;
pub mod reducer;
pub mod reducers;
pub mod render;
pub mod runtime;
pub mod state;
pub mod sync;
pub mod types;
pub mod url;
pub mod view;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use channel::{EventChannel, RowsUpdated, ROWS_UPDATED_EVENT};
pub use document::{Page, PageLayout};
pub use effects::Effect;
pub use events::{event_to_actions, ElementRef, PageEvent};
pub use reducer::reduce;
pub use render::{RenderOutcome, Renderer};
pub use runtime::Runtime;
pub use state::{AppState, FilterState, PanelState, SortState};
pub use types::{Dimension, SortColumn, SortDirection};
