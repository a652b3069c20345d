//! Infrastructure - concrete adapters for the outbound ports

pub mod http_client;
pub mod platform;

pub use http_client::HttpApiAdapter;
pub use platform::{create_storage, PlatformStorage};
