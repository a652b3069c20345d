//! Infrastructure - repository port and adapters.

pub mod memory;
pub mod ports;
pub mod sqlite;

pub use memory::InMemoryRequestRepo;
pub use sqlite::SqliteRequestRepo;
