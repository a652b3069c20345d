//! Reusable UI components

pub mod request_list;

pub use request_list::{RequestList, RequestRow};
