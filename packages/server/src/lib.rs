//! Room-based real-time push gateway.
//!
//! Clients connect over WebSocket and join the room named in their handshake;
//! events are relayed between members of the same room, and an HTTP API lets
//! external callers push messages to a room or to a single user.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerArgs, ServerError, run};
