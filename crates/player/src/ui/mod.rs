use dioxus::prelude::*;

pub mod presentation;

const STYLES: &str = include_str!("../../assets/approvals.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::RequestListState::new);

    rsx! {
        style { {STYLES} }

        main {
            class: "approvals-shell",
            presentation::components::RequestList {}
        }
    }
}
