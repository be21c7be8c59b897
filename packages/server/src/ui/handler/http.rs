//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use pushgate_shared::time::timestamp_to_jst_rfc3339;

use crate::{
    domain::{Connection, ConnectionRegistry, RoomId, RoomMembership, UserId, ValueObjectError},
    infrastructure::dto::http::{
        LegacyPushQuery, MemberDetailDto, PushResponseDto, PushToRoomRequest, PushToUserRequest,
        RoomDetailDto, RoomSummaryDto,
    },
    ui::state::AppState,
    usecase::PushReceipt,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Push a message to every member of a room
///
/// Always 200: an empty room id names no room, so nothing is delivered.
pub async fn push_to_room(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PushToRoomRequest>,
) -> Json<PushResponseDto> {
    let receipt = push_room(&state, request.room_id, &request.message);
    Json(to_response(receipt))
}

/// Push a message to the connection registered under a user id
pub async fn push_to_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PushToUserRequest>,
) -> Json<PushResponseDto> {
    let receipt = match UserId::try_from(request.user_id) {
        Ok(user_id) => state.gateway.push_to_user(&user_id, &request.message),
        Err(e) => undeliverable(e, request.message),
    };
    Json(to_response(receipt))
}

/// `POST /?roomId=..&msgContent=..`, echoing the content back as plain text
pub async fn legacy_push(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LegacyPushQuery>,
) -> String {
    push_room(&state, query.room_id, &query.msg_content).message
}

/// Get list of non-empty rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state
        .membership
        .rooms()
        .into_iter()
        .map(|room| RoomSummaryDto {
            id: room.id.into_string(),
            member_count: room.member_count,
        })
        .collect();
    Json(rooms)
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room = RoomId::new(room_id).map_err(|_| StatusCode::NOT_FOUND)?;

    let mut members = state.membership.members(&room);
    // An empty room does not exist
    if members.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }
    members.sort_by_key(|connection| connection.connected_at());

    Ok(Json(RoomDetailDto {
        id: room.into_string(),
        members: members
            .iter()
            .map(|connection| member_detail(&state, connection))
            .collect(),
    }))
}

/// Get the connection registered under a user id
pub async fn get_user_detail(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<MemberDetailDto>, StatusCode> {
    let user_id = UserId::new(user_id).map_err(|_| StatusCode::NOT_FOUND)?;
    let connection = state
        .registry
        .lookup(&user_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(member_detail(&state, &connection)))
}

fn push_room(state: &AppState, room_id: String, message: &str) -> PushReceipt {
    match RoomId::try_from(room_id) {
        Ok(room) => state.gateway.push_to_room(&room, message),
        Err(e) => undeliverable(e, message.to_string()),
    }
}

// An id that fails validation cannot name a live target.
fn undeliverable(error: ValueObjectError, message: String) -> PushReceipt {
    tracing::debug!("Push dropped, no such target: {}", error);
    PushReceipt {
        message,
        delivered: 0,
    }
}

fn to_response(receipt: PushReceipt) -> PushResponseDto {
    PushResponseDto {
        message: receipt.message,
        delivered: receipt.delivered,
    }
}

fn member_detail(state: &AppState, connection: &Connection) -> MemberDetailDto {
    MemberDetailDto {
        connection_id: connection.id().to_string(),
        remote_addr: connection.remote_addr().to_string(),
        user_id: state.routing.user_for(connection).map(UserId::into_string),
        connected_at: timestamp_to_jst_rfc3339(connection.connected_at().value()),
    }
}
