//! Logger setup shared by the server and client binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter directive used when `RUST_LOG` is not set.
///
/// The binary's own crate logs at `default_level`, the HTTP trace layer at `debug`.
pub fn default_directive(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!("{crate_name}={default_level},tower_http=debug")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the default directive. Calling this twice is harmless:
/// the second initialization is ignored.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}
