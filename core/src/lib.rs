//! Triage library - keyword classification and ticket handling for ITSM intake.
//!
//! This crate provides:
//! - Ticket type and priority classification with canned responses (`classify`)
//! - Spanish display labels for types, priorities and statuses (`labels`)
//! - Ticket records, dashboard filters, statistics and stores (`tickets`)
//! - Date display helpers (`format`)
//! - Environment-driven configuration (`config`)
//!
//! Feature flags:
//! - `cli`: Command-line interface
//! - `server`: HTTP API

// Core modules (always compiled)
pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod labels;
pub mod tickets;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// HTTP API (feature-gated)
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use classify::{classify, generate_response, Classification, Priority, TicketType};
pub use tickets::model::{Ticket, TicketStatus};
