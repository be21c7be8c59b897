//! InMemory Connection Registry 実装
//!
//! UserId → Connection のマッピング。`DashMap` のシャード単位のロックで
//! キーごとの操作がアトミックになります。

use dashmap::DashMap;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, UserId};

/// インメモリ Connection Registry 実装
#[derive(Debug, Default)]
pub struct InMemoryConnectionRegistry {
    connections: DashMap<UserId, Connection>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.connections.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl ConnectionRegistry for InMemoryConnectionRegistry {
    fn register(&self, user_id: UserId, connection: Connection) -> Option<Connection> {
        self.connections.insert(user_id, connection)
    }

    fn unregister(&self, user_id: &UserId) -> Option<Connection> {
        self.connections.remove(user_id).map(|(_, connection)| connection)
    }

    fn unregister_connection(
        &self,
        user_id: &UserId,
        connection_id: ConnectionId,
    ) -> Option<Connection> {
        self.connections
            .remove_if(user_id, |_, connection| connection.id() == connection_id)
            .map(|(_, connection)| connection)
    }

    fn lookup(&self, user_id: &UserId) -> Option<Connection> {
        self.connections
            .get(user_id)
            .map(|entry| entry.value().clone())
    }
}
