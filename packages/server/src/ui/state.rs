//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{ConnectionRegistry, RoomMembership},
    infrastructure::repository::{InMemoryConnectionRegistry, InMemoryRoomMembership},
    usecase::{EventRouter, HandshakeRouting, PushGateway},
};

/// Shared application state
pub struct AppState {
    /// UserId → connection (shared with the router and the gateway)
    pub registry: Arc<dyn ConnectionRegistry>,
    /// RoomId → member connections
    pub membership: Arc<dyn RoomMembership>,
    pub routing: Arc<HandshakeRouting>,
    pub router: EventRouter,
    pub gateway: PushGateway,
}

impl AppState {
    /// Wire the in-memory stores into the router and the gateway.
    pub fn new(routing: HandshakeRouting) -> Self {
        let registry: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());
        let membership: Arc<dyn RoomMembership> = Arc::new(InMemoryRoomMembership::new());
        let routing = Arc::new(routing);
        Self {
            router: EventRouter::new(registry.clone(), membership.clone(), routing.clone()),
            gateway: PushGateway::new(registry.clone(), membership.clone()),
            registry,
            membership,
            routing,
        }
    }
}
