//! Event router: drives each connection through
//! `Connecting -> Connected -> Disconnected` and runs the matching use case
//! for every transition.

use std::sync::Arc;

use crate::domain::{
    Connection, ConnectionRegistry, ConnectionState, LifecycleError, LifecycleEvent,
    RoomMembership,
};

use super::{
    connect_client::{ConnectClientUseCase, ConnectOutcome},
    disconnect_client::{DisconnectClientUseCase, DisconnectOutcome},
    relay_message::RelayMessageUseCase,
    routing::HandshakeRouting,
};

/// One connection plus where it is in its lifecycle.
///
/// Owned by the transport task serving that connection.
#[derive(Debug)]
pub struct Session {
    connection: Connection,
    state: ConnectionState,
}

impl Session {
    pub fn new(connection: Connection) -> Self {
        Self {
            connection,
            state: ConnectionState::Connecting,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Apply `event` and return the state it was applied to.
    fn advance(&mut self, event: LifecycleEvent) -> Result<ConnectionState, LifecycleError> {
        let previous = self.state;
        self.state = previous.next(event)?;
        Ok(previous)
    }
}

pub struct EventRouter {
    connect: ConnectClientUseCase,
    relay: RelayMessageUseCase,
    disconnect: DisconnectClientUseCase,
}

impl EventRouter {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        membership: Arc<dyn RoomMembership>,
        routing: Arc<HandshakeRouting>,
    ) -> Self {
        Self {
            connect: ConnectClientUseCase::new(
                registry.clone(),
                membership.clone(),
                routing.clone(),
            ),
            relay: RelayMessageUseCase::new(membership.clone(), routing.clone()),
            disconnect: DisconnectClientUseCase::new(registry, membership, routing),
        }
    }

    /// Transport reported a completed handshake.
    pub fn on_connect(&self, session: &mut Session) -> Result<ConnectOutcome, LifecycleError> {
        session.advance(LifecycleEvent::Connect)?;
        Ok(self.connect.execute(&session.connection))
    }

    /// Connection sent application data. Returns how many members it reached.
    pub fn on_message(&self, session: &mut Session, data: &str) -> Result<usize, LifecycleError> {
        session.advance(LifecycleEvent::Message)?;
        Ok(self.relay.execute(&session.connection, data))
    }

    /// Transport reported the connection is gone.
    ///
    /// Only the first disconnect of a connected session has side effects;
    /// later calls (and a disconnect before connect) return `None`.
    pub fn on_disconnect(&self, session: &mut Session) -> Option<DisconnectOutcome> {
        // Disconnect is accepted from every state.
        let previous = session.advance(LifecycleEvent::Disconnect).ok()?;
        (previous == ConnectionState::Connected)
            .then(|| self.disconnect.execute(&session.connection))
    }
}
