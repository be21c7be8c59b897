//! WebSocket / HTTP server implementation.

mod config;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use config::ServerArgs;
pub use runner::{ServerError, build_app, run, serve};
