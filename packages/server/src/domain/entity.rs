//! Core domain models for the push gateway.

use std::{fmt, net::SocketAddr, sync::Arc};

use tokio::sync::mpsc::UnboundedSender;

use super::{
    error::{DeliveryError, LifecycleError},
    value_object::{ConnectionId, HandshakeParams, Timestamp},
};

/// Names of the events the server emits to connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// Direct acknowledgement to a newly connected client
    Connected,
    /// Room broadcast when a connection joins
    Join,
    /// Relayed or pushed application message
    Message,
    /// Room broadcast when a connection leaves
    Leave,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Join => "join",
            Self::Message => "message",
            Self::Leave => "leave",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound `(event name, payload)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEvent {
    pub name: EventName,
    pub payload: String,
}

impl ServerEvent {
    pub fn new(name: EventName, payload: impl Into<String>) -> Self {
        Self {
            name,
            payload: payload.into(),
        }
    }

    pub fn connected(room_size: usize) -> Self {
        Self::new(
            EventName::Connected,
            format!("connected successfully, room size: {room_size}"),
        )
    }

    pub fn join(remote_addr: SocketAddr) -> Self {
        Self::new(EventName::Join, format!("{remote_addr} join room"))
    }

    pub fn leave(remote_addr: SocketAddr) -> Self {
        Self::new(EventName::Leave, format!("{remote_addr} leave room"))
    }

    pub fn message(payload: impl Into<String>) -> Self {
        Self::new(EventName::Message, payload)
    }
}

/// What the transport task receives on a connection's outbound queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundFrame {
    Event(ServerEvent),
    /// Ask the transport to close the underlying channel
    Close,
}

/// Handle to one live connection.
///
/// Cloning is cheap: the handshake snapshot is shared and the sender is a
/// queue handle. The socket itself stays with the transport task.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    remote_addr: SocketAddr,
    handshake: Arc<HandshakeParams>,
    connected_at: Timestamp,
    sender: UnboundedSender<OutboundFrame>,
}

impl Connection {
    pub fn new(
        id: ConnectionId,
        remote_addr: SocketAddr,
        handshake: HandshakeParams,
        connected_at: Timestamp,
        sender: UnboundedSender<OutboundFrame>,
    ) -> Self {
        Self {
            id,
            remote_addr,
            handshake: Arc::new(handshake),
            connected_at,
            sender,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    pub fn handshake(&self) -> &HandshakeParams {
        &self.handshake
    }

    pub fn connected_at(&self) -> Timestamp {
        self.connected_at
    }

    /// Queue an event for delivery. Never blocks.
    pub fn send_event(&self, event: ServerEvent) -> Result<(), DeliveryError> {
        self.sender
            .send(OutboundFrame::Event(event))
            .map_err(|_| DeliveryError::ChannelClosed(self.id))
    }

    /// Ask the transport to close this connection.
    ///
    /// Closing an already closed connection is a no-op.
    pub fn close(&self) {
        let _ = self.sender.send(OutboundFrame::Close);
    }

    #[cfg(test)]
    pub(crate) fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Lifecycle state of a single connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

/// Transport-reported events driving [`ConnectionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Connect,
    Message,
    Disconnect,
}

impl ConnectionState {
    /// Next state after `event`.
    ///
    /// `Disconnected` is terminal; a repeated disconnect stays there without error.
    pub fn next(self, event: LifecycleEvent) -> Result<Self, LifecycleError> {
        match (self, event) {
            (Self::Connecting, LifecycleEvent::Connect) => Ok(Self::Connected),
            (Self::Connected, LifecycleEvent::Message) => Ok(Self::Connected),
            (_, LifecycleEvent::Disconnect) => Ok(Self::Disconnected),
            (from, event) => Err(LifecycleError::InvalidTransition { from, event }),
        }
    }
}
