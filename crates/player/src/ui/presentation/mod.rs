//! Presentation layer - components, UI state, and service hooks

pub mod components;
pub mod services;
pub mod state;

pub use services::{use_request_actions, Services, UiController};
