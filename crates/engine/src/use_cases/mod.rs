//! Use cases - User story orchestration.

pub mod requests;

pub use requests::{RequestError, RequestManagement};
