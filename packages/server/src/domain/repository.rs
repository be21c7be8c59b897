//! Store abstractions owned by the domain layer.
//!
//! The use cases depend on these traits; the concrete stores live in the
//! infrastructure layer.

use super::{
    entity::{Connection, ServerEvent},
    value_object::{ConnectionId, RoomId, UserId},
};

/// Room id with its current member count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub id: RoomId,
    pub member_count: usize,
}

/// Identity key → live connection.
///
/// Every operation is atomic per key. Nothing is ordered across keys.
#[cfg_attr(test, mockall::automock)]
pub trait ConnectionRegistry: Send + Sync {
    /// Insert or overwrite the mapping. Returns the connection it replaced.
    fn register(&self, user_id: UserId, connection: Connection) -> Option<Connection>;

    /// Remove the mapping if present. Absent keys are a no-op.
    fn unregister(&self, user_id: &UserId) -> Option<Connection>;

    /// Remove the mapping only while it still points at `connection_id`.
    fn unregister_connection(
        &self,
        user_id: &UserId,
        connection_id: ConnectionId,
    ) -> Option<Connection>;

    fn lookup(&self, user_id: &UserId) -> Option<Connection>;
}

/// Room → set of member connections.
///
/// A room exists exactly while it has members.
#[cfg_attr(test, mockall::automock)]
pub trait RoomMembership: Send + Sync {
    /// Add `connection` to `room` and return the member count after joining.
    ///
    /// Joining twice with the same connection is idempotent.
    fn join(&self, room: &RoomId, connection: Connection) -> usize;

    /// Remove the connection and return the remaining member count.
    ///
    /// `None` when the connection was not a member (already left or never joined).
    fn leave(&self, room: &RoomId, connection_id: ConnectionId) -> Option<usize>;

    fn member_count(&self, room: &RoomId) -> usize;

    /// Snapshot of the current members of `room`.
    fn members(&self, room: &RoomId) -> Vec<Connection>;

    /// Deliver `event` to every current member, skipping failed deliveries.
    ///
    /// Returns the number of members the event was handed to.
    fn broadcast(&self, room: &RoomId, event: &ServerEvent) -> usize;

    /// All non-empty rooms, sorted by id.
    fn rooms(&self) -> Vec<RoomSummary>;
}
