//! UI state held in Dioxus signals

pub mod request_list_state;

pub use request_list_state::RequestListState;
