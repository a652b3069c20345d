//! Approvals Player App - client-side core of the approvals screen.
//!
//! Holds everything the UI needs that does not touch a renderer: outbound
//! ports, the HTTP and storage adapters, the status cache, the request list
//! view model, and the action controller that ties them together.

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::config::ClientConfig;
pub use application::error::ActionError;
pub use application::services::{RequestActionController, StatusCache};
pub use application::view_model::{
    ListStatus, PendingAction, RequestItemView, RequestListView, ViewSink,
};
pub use application::RequestStoreClient;
