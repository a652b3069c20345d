//! Approvals Shared - Wire types for the request store HTTP contract
//!
//! This crate contains the types both sides of the HTTP boundary agree on:
//! - Request list entries returned by `GET /view_requests`
//! - Update and delete bodies
//! - Route paths
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain vocabulary types
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod dto;
pub mod routes;

pub use dto::{CreateRequestBody, DeleteRequestForm, RequestDto, UpdateStatusBody};
