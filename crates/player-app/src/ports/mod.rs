//! Ports - Interfaces the client core depends on

pub mod outbound;
