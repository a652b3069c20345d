//! Outbound ports - Interfaces for external services
//!
//! Adapters in `crate::infrastructure` implement these; the application layer
//! only sees the traits.

pub mod api_port;
pub mod platform;
pub mod raw_api_port;
pub mod request_store_port;

pub use api_port::ApiError;
pub use platform::{storage_keys, StorageProvider};
pub use raw_api_port::RawApiPort;
pub use request_store_port::RequestStorePort;

#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
#[cfg(any(test, feature = "testing"))]
pub use request_store_port::MockRequestStorePort;
