//! Approvals domain model.
//!
//! Requests are owned by the request store; the client only ever mirrors
//! them. The one piece of client-owned state is [`CachedStatus`].

pub mod cached_status;
pub mod error;
pub mod ids;
pub mod request;

pub use cached_status::CachedStatus;
pub use error::DomainError;
pub use ids::RequestId;
pub use request::{Decision, Request, RequestStatus};
