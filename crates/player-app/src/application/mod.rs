//! Application layer - request list model, status cache, and user actions

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod view_model;

pub use api::RequestStoreClient;
