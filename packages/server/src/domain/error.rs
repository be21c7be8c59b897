//! Domain layer error definitions.

use thiserror::Error;

use super::{
    entity::{ConnectionState, LifecycleEvent},
    value_object::ConnectionId,
};

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// UserId validation error
    #[error("UserId cannot be empty")]
    UserIdEmpty,
}

/// Errors raised by the per-connection state machine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("cannot apply {event:?} to a connection in state {from:?}")]
    InvalidTransition {
        from: ConnectionState,
        event: LifecycleEvent,
    },
}

/// Errors raised when handing an event to a connection's outbound queue
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("outbound channel of connection {0} is closed")]
    ChannelClosed(ConnectionId),
}
