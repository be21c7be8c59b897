//! UseCase: 接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() メソッド
//! - ルームへの参加、connected / join イベントの送信、UserId の登録
//!
//! ### なぜこのテストが必要か
//! - 新しい接続が参加後の人数を受け取ることを保証
//! - join 通知が新しい接続自身を含むルーム全員に届くことを確認
//! - UserId がない接続も通常通りルームに参加できることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：UserId あり / なしの接続
//! - エッジケース：roomId がない接続（デフォルトルーム）
//! - エッジケース：同じ UserId での再接続（後勝ち、古い接続は閉じない）

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRegistry, RoomId, RoomMembership, ServerEvent, UserId};

use super::routing::HandshakeRouting;

/// 接続処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOutcome {
    pub room: RoomId,
    /// 参加後のルーム人数
    pub room_size: usize,
    pub user_id: Option<UserId>,
}

/// 接続のユースケース
pub struct ConnectClientUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    membership: Arc<dyn RoomMembership>,
    routing: Arc<HandshakeRouting>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        membership: Arc<dyn RoomMembership>,
        routing: Arc<HandshakeRouting>,
    ) -> Self {
        Self {
            registry,
            membership,
            routing,
        }
    }

    /// 接続処理を実行
    ///
    /// 1. ルームに参加
    /// 2. 本人に connected（参加後の人数）を送信
    /// 3. ルーム全員に join を送信
    /// 4. UserId があれば Registry に登録
    pub fn execute(&self, connection: &Connection) -> ConnectOutcome {
        if self.routing.requested_room(connection.handshake()).is_none() {
            tracing::warn!(
                "Connection {} from {} has a missing or empty room parameter, routing to '{}'",
                connection.id(),
                connection.remote_addr(),
                self.routing.default_room()
            );
        }
        let room = self.routing.room_for(connection);

        let room_size = self.membership.join(&room, connection.clone());

        if let Err(e) = connection.send_event(ServerEvent::connected(room_size)) {
            tracing::warn!("Failed to send connected to {}: {}", connection.remote_addr(), e);
        }

        self.membership
            .broadcast(&room, &ServerEvent::join(connection.remote_addr()));

        let user_id = self.routing.user_for(connection);
        if let Some(user_id) = &user_id {
            let previous = self.registry.register(user_id.clone(), connection.clone());
            if let Some(previous) = previous {
                tracing::info!(
                    "User '{}' re-registered: connection {} replaces {}",
                    user_id,
                    connection.id(),
                    previous.id()
                );
            }
        }

        tracing::info!(
            "Connection {} from {} joined room '{}' (size: {})",
            connection.id(),
            connection.remote_addr(),
            room,
            room_size
        );

        ConnectOutcome {
            room,
            room_size,
            user_id,
        }
    }
}
