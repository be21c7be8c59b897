//! Handshake routing: which room and which identity a connection belongs to.
//!
//! Both are read from the immutable handshake snapshot every time they are
//! needed, so no per-connection copy can go stale.

use crate::domain::{Connection, HandshakeParams, RoomId, UserId};

pub const DEFAULT_ROOM_PARAM: &str = "roomId";
pub const DEFAULT_USER_PARAM: &str = "userId";
pub const DEFAULT_ROOM: &str = "default";

/// Names of the handshake parameters plus the fallback room
#[derive(Debug, Clone)]
pub struct HandshakeRouting {
    room_param: String,
    user_param: String,
    default_room: RoomId,
}

impl HandshakeRouting {
    pub fn new(room_param: String, user_param: String, default_room: RoomId) -> Self {
        Self {
            room_param,
            user_param,
            default_room,
        }
    }

    pub fn default_room(&self) -> &RoomId {
        &self.default_room
    }

    /// Room named by the handshake. A missing or empty value yields `None`;
    /// any other value is used verbatim.
    pub fn requested_room(&self, handshake: &HandshakeParams) -> Option<RoomId> {
        handshake
            .first(&self.room_param)
            .and_then(|value| RoomId::new(value.to_string()).ok())
    }

    /// Room the connection is routed to: the requested room, else the default room.
    pub fn room_for(&self, connection: &Connection) -> RoomId {
        self.requested_room(connection.handshake())
            .unwrap_or_else(|| self.default_room.clone())
    }

    /// Identity key of the connection. An empty value counts as absent.
    pub fn user_for(&self, connection: &Connection) -> Option<UserId> {
        connection
            .handshake()
            .first(&self.user_param)
            .and_then(|value| UserId::new(value.to_string()).ok())
    }
}

impl Default for HandshakeRouting {
    fn default() -> Self {
        Self {
            room_param: DEFAULT_ROOM_PARAM.to_string(),
            user_param: DEFAULT_USER_PARAM.to_string(),
            default_room: RoomId::new(DEFAULT_ROOM.to_string()).expect("default room id is valid"),
        }
    }
}
