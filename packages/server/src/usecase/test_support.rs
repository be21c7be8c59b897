//! Fixtures shared by the use case tests.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    domain::{
        Connection, ConnectionIdFactory, EventName, HandshakeParams, OutboundFrame, ServerEvent,
        Timestamp,
    },
    infrastructure::repository::{InMemoryConnectionRegistry, InMemoryRoomMembership},
};

use super::routing::HandshakeRouting;

static NEXT_PORT: std::sync::atomic::AtomicU16 = std::sync::atomic::AtomicU16::new(50000);

pub struct TestStores {
    pub registry: Arc<InMemoryConnectionRegistry>,
    pub membership: Arc<InMemoryRoomMembership>,
    pub routing: Arc<HandshakeRouting>,
}

pub fn create_test_stores() -> TestStores {
    TestStores {
        registry: Arc::new(InMemoryConnectionRegistry::new()),
        membership: Arc::new(InMemoryRoomMembership::new()),
        routing: Arc::new(HandshakeRouting::default()),
    }
}

/// New connection with a unique remote port and the given handshake parameters.
pub fn connection_with(
    params: &[(&str, &str)],
) -> (Connection, mpsc::UnboundedReceiver<OutboundFrame>) {
    let port = NEXT_PORT.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    let (tx, rx) = mpsc::unbounded_channel();
    let connection = Connection::new(
        ConnectionIdFactory::generate(),
        format!("127.0.0.1:{port}").parse().unwrap(),
        HandshakeParams::from_pairs(params.iter().copied()),
        Timestamp::new(0),
        tx,
    );
    (connection, rx)
}

/// Drain every event currently queued, ignoring close requests.
pub fn drain_events(rx: &mut mpsc::UnboundedReceiver<OutboundFrame>) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        if let OutboundFrame::Event(event) = frame {
            events.push(event);
        }
    }
    events
}

/// Drain the queue and report whether a close request was seen.
pub fn drain_closed(rx: &mut mpsc::UnboundedReceiver<OutboundFrame>) -> bool {
    let mut closed = false;
    while let Ok(frame) = rx.try_recv() {
        if frame == OutboundFrame::Close {
            closed = true;
        }
    }
    closed
}

pub fn names(events: &[ServerEvent]) -> Vec<EventName> {
    events.iter().map(|event| event.name).collect()
}
