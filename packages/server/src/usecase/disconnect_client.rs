//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - ルームからの退出、leave 通知、UserId の登録解除と強制クローズ
//!
//! ### なぜこのテストが必要か
//! - 残りのメンバーに leave が届くことを保証
//! - 接続直後の切断でルーム・Registry に何も残らないことを確認
//! - 古い接続の切断が同じ UserId の新しい接続を消さないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：UserId あり / なしの切断
//! - エッジケース：最後のメンバーの切断（ルームが消える）
//! - エッジケース：2 回目の切断（何も起きない）

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRegistry, RoomId, RoomMembership, ServerEvent, UserId};

use super::routing::HandshakeRouting;

/// 切断処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectOutcome {
    pub room: RoomId,
    /// 退出後のルーム人数（既に退出済みだった場合は None）
    pub remaining: Option<usize>,
    pub user_id: Option<UserId>,
}

/// 切断のユースケース
pub struct DisconnectClientUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    membership: Arc<dyn RoomMembership>,
    routing: Arc<HandshakeRouting>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
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

    /// 切断処理を実行
    ///
    /// 1. ルームから退出
    /// 2. 残りのメンバーに leave を送信（実際に退出した場合のみ）
    /// 3. UserId があれば Registry から削除し、接続を強制クローズ
    ///
    /// 何度呼んでもエラーにはなりません。
    pub fn execute(&self, connection: &Connection) -> DisconnectOutcome {
        let room = self.routing.room_for(connection);

        let remaining = self.membership.leave(&room, connection.id());
        if remaining.is_some() {
            self.membership
                .broadcast(&room, &ServerEvent::leave(connection.remote_addr()));
        } else {
            tracing::debug!(
                "Connection {} was not a member of room '{}'",
                connection.id(),
                room
            );
        }

        let user_id = self.routing.user_for(connection);
        if let Some(user_id) = &user_id {
            if self
                .registry
                .unregister_connection(user_id, connection.id())
                .is_none()
            {
                tracing::debug!(
                    "User '{}' was not registered to connection {}",
                    user_id,
                    connection.id()
                );
            }
            connection.close();
        }

        tracing::info!(
            "Connection {} from {} left room '{}' (remaining: {})",
            connection.id(),
            connection.remote_addr(),
            room,
            remaining.unwrap_or(0)
        );

        DisconnectOutcome {
            room,
            remaining,
            user_id,
        }
    }
}
