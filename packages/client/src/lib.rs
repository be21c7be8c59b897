//! CLI client for pushgate rooms.

pub mod args;
pub mod error;
pub mod event;
pub mod runner;

pub use args::ClientArgs;
pub use error::ClientError;
pub use runner::run_client;
