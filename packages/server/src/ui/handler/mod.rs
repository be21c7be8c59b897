//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{
    get_room_detail, get_rooms, get_user_detail, health_check, legacy_push, push_to_room,
    push_to_user,
};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
