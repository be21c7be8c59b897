//! Command line configuration.

use clap::Parser;

use crate::{
    domain::{RoomId, ValueObjectError},
    usecase::{
        HandshakeRouting,
        routing::{DEFAULT_ROOM, DEFAULT_ROOM_PARAM, DEFAULT_USER_PARAM},
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pushgate-server", version, about = "Room-based WebSocket push gateway")]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Room for connections whose handshake names none
    #[arg(long, default_value = DEFAULT_ROOM)]
    pub default_room: String,

    /// Handshake query parameter holding the room id
    #[arg(long, default_value = DEFAULT_ROOM_PARAM)]
    pub room_param: String,

    /// Handshake query parameter holding the user id
    #[arg(long, default_value = DEFAULT_USER_PARAM)]
    pub user_param: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerArgs {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn routing(&self) -> Result<HandshakeRouting, ValueObjectError> {
        Ok(HandshakeRouting::new(
            self.room_param.clone(),
            self.user_param.clone(),
            RoomId::new(self.default_room.clone())?,
        ))
    }
}
