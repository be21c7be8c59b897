//! Shared utilities for pushgate (logging setup and time helpers).

pub mod logger;
pub mod time;
