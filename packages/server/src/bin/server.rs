//! Push gateway server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin pushgate-server -- --port 8080
//! ```

use clap::Parser;
use pushgate_server::ServerArgs;
use pushgate_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the server
    if let Err(e) = pushgate_server::run(args).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
