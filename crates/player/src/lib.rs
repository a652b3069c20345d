//! Approvals Player - Dioxus UI for the request approval screen.
//!
//! Rendering only. List state, the status cache, and actions live in
//! `approvals_player_app`; the binary in `main.rs` wires the adapters.

pub mod ui;

pub use ui::app;
pub use ui::presentation;
