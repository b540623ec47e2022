/// Work the runtime performs after the reducer has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing observable changed
    None,
    /// Presentation-only change: re-sync widgets, keep the rendered rows
    SyncWidgets,
    /// Filter or sort changed: recompute the view, render, sync, notify
    Render,
}
