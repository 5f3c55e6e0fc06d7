//! Ticket records and everything built on them.

pub mod book;
pub mod filters;
pub mod model;
pub mod stats;
pub mod storage;

pub use book::{BookError, TicketBook};
pub use filters::TicketFilter;
pub use storage::{FileStore, MemoryStore, StorageError, TicketStore};
