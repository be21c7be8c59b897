//! InMemory Room Membership 実装
//!
//! RoomId → メンバー接続の集合。ルームはメンバーが 1 人以上いる間だけ存在し、
//! 最後のメンバーが抜けた時点でエントリごと削除されます。

use std::collections::HashMap;

use dashmap::{DashMap, mapref::entry::Entry};

use crate::domain::{Connection, ConnectionId, RoomId, RoomMembership, RoomSummary, ServerEvent};

/// インメモリ Room Membership 実装
#[derive(Debug, Default)]
pub struct InMemoryRoomMembership {
    rooms: DashMap<RoomId, HashMap<ConnectionId, Connection>>,
}

impl InMemoryRoomMembership {
    /// 新しい InMemoryRoomMembership を作成
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }
}

impl RoomMembership for InMemoryRoomMembership {
    fn join(&self, room: &RoomId, connection: Connection) -> usize {
        let mut members = self.rooms.entry(room.clone()).or_default();
        members.insert(connection.id(), connection);
        members.len()
    }

    fn leave(&self, room: &RoomId, connection_id: ConnectionId) -> Option<usize> {
        match self.rooms.entry(room.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().remove(&connection_id)?;
                let remaining = entry.get().len();
                if remaining == 0 {
                    entry.remove();
                }
                Some(remaining)
            }
            Entry::Vacant(_) => None,
        }
    }

    fn member_count(&self, room: &RoomId) -> usize {
        self.rooms.get(room).map(|members| members.len()).unwrap_or(0)
    }

    fn members(&self, room: &RoomId) -> Vec<Connection> {
        self.rooms
            .get(room)
            .map(|members| members.values().cloned().collect())
            .unwrap_or_default()
    }

    fn broadcast(&self, room: &RoomId, event: &ServerEvent) -> usize {
        // Snapshot first so no shard lock is held while sending
        let members = self.members(room);
        let mut delivered = 0;
        for member in members {
            match member.send_event(event.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!("Failed to send '{}' to room '{}': {}", event.name, room, e);
                }
            }
        }
        delivered
    }

    fn rooms(&self) -> Vec<RoomSummary> {
        let mut rooms: Vec<RoomSummary> = self
            .rooms
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| RoomSummary {
                id: entry.key().clone(),
                member_count: entry.value().len(),
            })
            .collect();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        rooms
    }
}
