//! Request list view model
//!
//! Renderer-agnostic state of the approvals screen. The Dioxus layer wraps a
//! `RequestListView` in a signal and re-renders whenever it changes; tests drive
//! it directly.

use approvals_domain::{Decision, RequestId, RequestStatus};
use approvals_shared::RequestDto;

use super::error::ActionError;

/// Action currently awaiting a response for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Decide(Decision),
    Delete,
}

/// One rendered request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestItemView {
    pub id: RequestId,
    pub name: String,
    pub date: String,
    pub reason: String,
    /// What the store reported on the last fetch; `None` for stores that
    /// predate the status field
    pub server_status: Option<RequestStatus>,
    badge: Option<Decision>,
    in_flight: Option<PendingAction>,
    error: Option<String>,
}

impl RequestItemView {
    pub fn from_dto(dto: RequestDto) -> Self {
        Self {
            badge: dto.status.and_then(|status| status.decision()),
            id: dto.id,
            name: dto.name,
            date: dto.date,
            reason: dto.reason,
            server_status: dto.status,
            in_flight: None,
            error: None,
        }
    }

    /// Element id of the rendered row: `request-{id}`
    pub fn dom_id(&self) -> String {
        format!("request-{}", self.id)
    }

    /// Decision shown in place of the accept/deny buttons, if any
    pub fn badge(&self) -> Option<Decision> {
        self.badge
    }

    pub fn show_badge(&mut self, decision: Decision) {
        self.badge = Some(decision);
    }

    pub fn status(&self) -> RequestStatus {
        self.badge
            .map(|decision| decision.status())
            .unwrap_or(RequestStatus::Pending)
    }

    /// Accept/Deny stay on screen until a decision is shown
    pub fn decision_controls_visible(&self) -> bool {
        self.badge.is_none()
    }

    /// Every control on the row is disabled while an action is in flight
    pub fn controls_enabled(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn in_flight(&self) -> Option<PendingAction> {
        self.in_flight
    }

    /// Inline failure indicator from the last action, cleared on the next attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing fetched yet
    #[default]
    Unloaded,
    Loading,
    Ready,
    /// Last fetch failed; whatever was rendered before stays on screen
    LoadFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestListView {
    items: Vec<RequestItemView>,
    status: ListStatus,
}

impl RequestListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn needs_load(&self) -> bool {
        self.status == ListStatus::Unloaded
    }

    pub fn mark_loading(&mut self) {
        self.status = ListStatus::Loading;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.status = ListStatus::LoadFailed(message.into());
    }

    /// Replace the rendered list with a fresh fetch, in store order.
    ///
    /// Decisions still in flight for ids that survive the fetch stay in flight,
    /// so their controls remain disabled until the response lands. A delete
    /// marker is never carried: a row the store lists again is a live row.
    pub fn render(&mut self, requests: Vec<RequestDto>) {
        let previous = std::mem::take(&mut self.items);
        self.items = requests
            .into_iter()
            .map(|dto| {
                let mut item = RequestItemView::from_dto(dto);
                item.in_flight = previous
                    .iter()
                    .find(|old| old.id == item.id)
                    .and_then(|old| old.in_flight)
                    .filter(|action| matches!(action, PendingAction::Decide(_)));
                item
            })
            .collect();
        self.status = ListStatus::Ready;
    }

    pub fn items(&self) -> &[RequestItemView] {
        &self.items
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut RequestItemView> {
        self.items.iter_mut()
    }

    pub fn item(&self, id: &RequestId) -> Option<&RequestItemView> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn item_mut(&mut self, id: &RequestId) -> Option<&mut RequestItemView> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mark `action` as in flight for `id`, or explain why it cannot start.
    pub fn begin_action(&mut self, id: &RequestId, action: PendingAction) -> Result<(), ActionError> {
        let item = self
            .item_mut(id)
            .ok_or_else(|| ActionError::NotListed(id.clone()))?;

        if item.in_flight.is_some() {
            return Err(ActionError::Busy(id.clone()));
        }
        if let (PendingAction::Decide(_), Some(decision)) = (action, item.badge) {
            return Err(ActionError::AlreadyDecided {
                id: id.clone(),
                decision,
            });
        }

        item.in_flight = Some(action);
        item.error = None;
        Ok(())
    }

    pub fn complete_decision(&mut self, id: &RequestId, decision: Decision) {
        if let Some(item) = self.item_mut(id) {
            item.in_flight = None;
            item.error = None;
            item.badge = Some(decision);
        }
    }

    /// Settle a failed action: controls come back, with an inline error.
    pub fn fail_action(&mut self, id: &RequestId, message: impl Into<String>) {
        if let Some(item) = self.item_mut(id) {
            item.in_flight = None;
            item.error = Some(message.into());
        }
    }

    /// Drop exactly one request from the rendered list.
    pub fn remove(&mut self, id: &RequestId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }
}

/// Anything holding a `RequestListView` that the action controller can mutate.
///
/// Implementations must not hold a borrow across the closure; the controller
/// calls `update` between awaits, never during one.
pub trait ViewSink {
    fn update<R>(&mut self, f: impl FnOnce(&mut RequestListView) -> R) -> R;
}

impl ViewSink for RequestListView {
    fn update<R>(&mut self, f: impl FnOnce(&mut RequestListView) -> R) -> R {
        f(self)
    }
}
