//! Domain layer for the push gateway.
//!
//! This module contains the connection and room model plus the store traits,
//! independent of transport and DTO concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{Connection, ConnectionState, EventName, LifecycleEvent, OutboundFrame, ServerEvent};
pub use error::{DeliveryError, LifecycleError, ValueObjectError};
pub use factory::ConnectionIdFactory;
pub use repository::{ConnectionRegistry, RoomMembership, RoomSummary};
pub use value_object::{ConnectionId, HandshakeParams, RoomId, Timestamp, UserId};

#[cfg(test)]
pub use repository::{MockConnectionRegistry, MockRoomMembership};
