pub mod classify;
pub mod health;
pub mod labels;
pub mod staff;
pub mod stats;
pub mod tickets;
