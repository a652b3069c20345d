//! Approvals Engine library.
//!
//! Reference implementation of the request store the approvals client talks
//! to.
//!
//! ## Structure
//!
//! - `use_cases/` - Request lifecycle orchestration
//! - `infrastructure/` - Repository port and its adapters (memory, SQLite)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
