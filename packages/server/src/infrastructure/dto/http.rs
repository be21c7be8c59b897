//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/push/room`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushToRoomRequest {
    pub room_id: String,
    pub message: String,
}

/// Body of `POST /api/push/user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushToUserRequest {
    pub user_id: String,
    pub message: String,
}

/// Echo returned by both push endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushResponseDto {
    pub message: String,
    /// Number of connections the message was handed to
    pub delivered: usize,
}

/// Query of the legacy `POST /?roomId=..&msgContent=..` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyPushQuery {
    #[serde(rename = "roomId")]
    pub room_id: String,
    #[serde(rename = "msgContent")]
    pub msg_content: String,
}

/// Room summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub member_count: usize,
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub members: Vec<MemberDetailDto>,
}

/// One connection in a room or behind a user id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetailDto {
    pub connection_id: String,
    pub remote_addr: String,
    pub user_id: Option<String>,
    pub connected_at: String, // ISO 8601
}
