//! Terminal client for a pushgate room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin pushgate-client -- --room lobby --user alice
//! ```

use clap::Parser;
use pushgate_client::ClientArgs;
use pushgate_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ClientArgs::parse();

    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = pushgate_client::run_client(args).await {
        tracing::error!("Client error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
