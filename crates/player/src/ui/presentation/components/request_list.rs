//! Request list - the approval screen itself.
//!
//! Every request renders as a row keyed by its store id. Names, dates, and
//! reasons are interpolated as text nodes, never as markup.

use dioxus::prelude::*;

use approvals_domain::{Decision, RequestId};
use approvals_player_app::{ListStatus, PendingAction, RequestItemView};

use crate::presentation::services::{use_request_actions, UiController};
use crate::presentation::state::RequestListState;

#[component]
pub fn RequestList() -> Element {
    let controller = use_request_actions();
    let state = use_context::<RequestListState>();

    // Loads at most once; a remount finds the list already loaded.
    {
        let controller = controller.clone();
        use_effect(move || {
            let controller = controller.clone();
            let mut state = state;
            spawn(async move {
                let _ = controller.initialize(&mut state).await;
            });
        });
    }

    let (status, items) = {
        let view = state.view.read();
        (view.status().clone(), view.items().to_vec())
    };
    let show_empty = status == ListStatus::Ready && items.is_empty();

    let retry = move |_: MouseEvent| {
        let controller = controller.clone();
        let mut state = state;
        spawn(async move {
            let _ = controller.reload(&mut state).await;
        });
    };

    rsx! {
        section {
            class: "request-panel",

            h1 { "Requests" }

            {
                match status {
                    ListStatus::LoadFailed(message) => rsx! {
                        div {
                            class: "load-error",
                            role: "alert",
                            span { "Could not load requests: {message}" }
                            button {
                                class: "retry",
                                onclick: retry,
                                "Retry"
                            }
                        }
                    },
                    ListStatus::Loading if items.is_empty() => rsx! {
                        p { class: "loading", "Loading requests..." }
                    },
                    _ => rsx! {},
                }
            }

            if show_empty {
                p { class: "empty", "No requests" }
            }

            ul {
                id: "request-list",
                class: "request-list",
                for item in items {
                    RequestRow { key: "{item.id}", item: item.clone() }
                }
            }
        }
    }
}

#[component]
pub fn RequestRow(item: RequestItemView) -> Element {
    let controller = use_request_actions();
    let state = use_context::<RequestListState>();

    let dom_id = item.dom_id();
    let status = item.status().as_str();
    let enabled = item.controls_enabled();
    let working = item.in_flight().is_some();
    let badge = item.badge();
    let error = item.error().map(str::to_string);

    let on_accept = action_handler(
        controller.clone(),
        state,
        item.id.clone(),
        PendingAction::Decide(Decision::Accepted),
    );
    let on_deny = action_handler(
        controller.clone(),
        state,
        item.id.clone(),
        PendingAction::Decide(Decision::Denied),
    );
    let on_delete = action_handler(controller, state, item.id.clone(), PendingAction::Delete);

    rsx! {
        li {
            id: "{dom_id}",
            class: "request",
            "data-status": "{status}",

            div { class: "request-name", "{item.name}" }
            div { class: "request-date", "{item.date}" }
            div { class: "request-reason", "{item.reason}" }

            div {
                class: "request-actions",

                if let Some(decision) = badge {
                    span {
                        class: "badge badge-{decision}",
                        {decision.label()}
                    }
                } else {
                    button {
                        class: "accept",
                        disabled: !enabled,
                        onclick: on_accept,
                        "Accept"
                    }
                    button {
                        class: "deny",
                        disabled: !enabled,
                        onclick: on_deny,
                        "Deny"
                    }
                }

                button {
                    class: "delete",
                    disabled: !enabled,
                    onclick: on_delete,
                    "Delete"
                }

                if working {
                    span { class: "working", "Saving..." }
                }

                if let Some(error) = error {
                    span {
                        class: "action-error",
                        role: "status",
                        "{error}"
                    }
                }
            }
        }
    }
}

/// Click handler that runs one controller action in the background.
///
/// Failures are already logged and shown on the row by the controller.
fn action_handler(
    controller: UiController,
    state: RequestListState,
    id: RequestId,
    action: PendingAction,
) -> impl FnMut(MouseEvent) + 'static {
    move |_| {
        let controller = controller.clone();
        let id = id.clone();
        let mut state = state;
        spawn(async move {
            let result = match action {
                PendingAction::Decide(decision) => controller.decide(&mut state, &id, decision).await,
                PendingAction::Delete => controller.delete(&mut state, &id).await,
            };
            if let Err(e) = result {
                tracing::debug!(request_id = %id, error = %e, "Action not completed");
            }
        });
    }
}
