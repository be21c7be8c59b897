//! UseCase: 受信メッセージのルーム内中継
//!
//! 送信者のルームをハンドシェイクから毎回導出し、送信者を含むルーム全員に
//! `message` を送ります。送信者への確認応答はありません。

use std::sync::Arc;

use crate::domain::{Connection, RoomMembership, ServerEvent};

use super::routing::HandshakeRouting;

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    membership: Arc<dyn RoomMembership>,
    routing: Arc<HandshakeRouting>,
}

impl RelayMessageUseCase {
    pub fn new(membership: Arc<dyn RoomMembership>, routing: Arc<HandshakeRouting>) -> Self {
        Self {
            membership,
            routing,
        }
    }

    /// `"<送信者 IP> :  <data>"`（コロンの後は空白 2 つ）をルームにブロードキャストし、配送数を返す
    pub fn execute(&self, sender: &Connection, data: &str) -> usize {
        let room = self.routing.room_for(sender);
        let ip = sender.remote_addr().ip();
        let delivered = self
            .membership
            .broadcast(&room, &ServerEvent::message(format!("{ip} :  {data}")));
        tracing::info!("{} -> room '{}' ({} delivered): {}", ip, room, delivered, data);
        delivered
    }
}
