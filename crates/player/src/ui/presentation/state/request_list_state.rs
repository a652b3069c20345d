//! Request list state
//!
//! A signal around the renderer-agnostic `RequestListView`. Writing through
//! `ViewSink` marks the signal dirty, so every controller update re-renders
//! the list.

use dioxus::prelude::*;

use approvals_player_app::{RequestListView, ViewSink};

#[derive(Clone, Copy)]
pub struct RequestListState {
    pub view: Signal<RequestListView>,
}

impl RequestListState {
    /// Create a new RequestListState with nothing loaded
    pub fn new() -> Self {
        Self {
            view: Signal::new(RequestListView::new()),
        }
    }
}

impl Default for RequestListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSink for RequestListState {
    fn update<R>(&mut self, f: impl FnOnce(&mut RequestListView) -> R) -> R {
        let mut view = self.view.write();
        f(&mut view)
    }
}
