//! Command line arguments.

use clap::Parser;

use crate::error::ClientError;

#[derive(Debug, Clone, Parser)]
#[command(name = "pushgate-client", version, about = "Join a pushgate room from the terminal")]
pub struct ClientArgs {
    /// WebSocket endpoint of the server
    #[arg(long, default_value = "ws://127.0.0.1:8080/ws")]
    pub url: String,

    /// Room to join
    #[arg(short, long)]
    pub room: String,

    /// User id to register, enabling direct pushes to this client
    #[arg(short, long)]
    pub user: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl ClientArgs {
    /// Endpoint URL with the `roomId` / `userId` handshake query.
    pub fn connect_url(&self) -> Result<String, ClientError> {
        let mut params = vec![("roomId", self.room.as_str())];
        if let Some(user) = &self.user {
            params.push(("userId", user.as_str()));
        }
        let query = serde_urlencoded::to_string(params)?;
        Ok(format!("{}?{}", self.url, query))
    }
}
