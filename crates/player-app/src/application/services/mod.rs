//! Application services

pub mod request_actions;
pub mod status_cache;

pub use request_actions::RequestActionController;
pub use status_cache::StatusCache;
