//! UseCase: 外部からのプッシュ（ルーム宛 / ユーザー宛）
//!
//! 宛先が存在しないことはエラーではありません。配送数 0 の成功として扱います。

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, RoomId, RoomMembership, ServerEvent, UserId};

/// プッシュ結果（呼び出し元へのエコー用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReceipt {
    pub message: String,
    /// message を渡した接続の数
    pub delivered: usize,
}

/// プッシュゲートウェイ
pub struct PushGateway {
    registry: Arc<dyn ConnectionRegistry>,
    membership: Arc<dyn RoomMembership>,
}

impl PushGateway {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, membership: Arc<dyn RoomMembership>) -> Self {
        Self {
            registry,
            membership,
        }
    }

    /// ルームの現在のメンバー全員に `message` を送る
    pub fn push_to_room(&self, room: &RoomId, message: &str) -> PushReceipt {
        let delivered = self
            .membership
            .broadcast(room, &ServerEvent::message(message));
        if delivered == 0 {
            tracing::debug!("Room '{}' has no members, push dropped", room);
        }
        tracing::info!("Pushed to room '{}' ({} delivered)", room, delivered);
        PushReceipt {
            message: message.to_string(),
            delivered,
        }
    }

    /// `user_id` で登録されている接続 1 つだけに `message` を送る
    pub fn push_to_user(&self, user_id: &UserId, message: &str) -> PushReceipt {
        let delivered = match self.registry.lookup(user_id) {
            Some(connection) => match connection.send_event(ServerEvent::message(message)) {
                Ok(()) => 1,
                Err(e) => {
                    tracing::warn!("Failed to push to user '{}': {}", user_id, e);
                    0
                }
            },
            None => {
                tracing::debug!("User '{}' is not connected, push dropped", user_id);
                0
            }
        };
        tracing::info!("Pushed to user '{}' ({} delivered)", user_id, delivered);
        PushReceipt {
            message: message.to_string(),
            delivered,
        }
    }
}
