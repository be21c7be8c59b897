//! WebSocket connection handlers.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{
        ConnectInfo, Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use pushgate_shared::time::get_jst_timestamp;
use tokio::sync::mpsc;

use crate::{
    domain::{Connection, ConnectionIdFactory, HandshakeParams, OutboundFrame, Timestamp},
    infrastructure::dto::websocket::{InboundEvent, OutboundEventDto},
    ui::state::AppState,
    usecase::Session,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    // Snapshot taken once; never mutated afterwards
    let handshake = HandshakeParams::from_pairs(params);
    ws.on_upgrade(move |socket| handle_socket(socket, state, remote_addr, handshake))
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
    handshake: HandshakeParams,
) {
    tracing::info!("Client {} connected", remote_addr);
    let (sender, mut receiver) = socket.split();

    // Outbound queue for this connection
    let (tx, rx) = mpsc::unbounded_channel();
    let connection = Connection::new(
        ConnectionIdFactory::generate(),
        remote_addr,
        handshake,
        Timestamp::new(get_jst_timestamp()),
        tx,
    );
    let mut session = Session::new(connection);

    // Spawn a task to forward queued events to this client
    let mut send_task = tokio::spawn(forward_outbound(sender, rx, remote_addr));

    match state.router.on_connect(&mut session) {
        Ok(_) => {
            // If any one side completes, stop the other
            tokio::select! {
                _ = receive_inbound(&mut receiver, &state, &mut session) => send_task.abort(),
                _ = &mut send_task => {},
            };
        }
        Err(e) => {
            tracing::error!("Failed to connect {}: {}", remote_addr, e);
            send_task.abort();
        }
    }

    state.router.on_disconnect(&mut session);
    tracing::info!("Client {} disconnected", remote_addr);
}

/// Read frames from the client until it closes or errors.
async fn receive_inbound(
    receiver: &mut SplitStream<WebSocket>,
    state: &AppState,
    session: &mut Session,
) {
    let remote_addr = session.connection().remote_addr();
    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::error!("WebSocket error from {}: {}", remote_addr, e);
                break;
            }
        };

        let event = match msg {
            Message::Text(text) => InboundEvent::from_text(text.as_str()),
            Message::Binary(bytes) => InboundEvent::from_binary(&bytes),
            Message::Ping(_) | Message::Pong(_) => {
                // Ping/pong is handled automatically by the WebSocket protocol
                continue;
            }
            Message::Close(_) => {
                tracing::info!("Client {} requested close", remote_addr);
                break;
            }
        };

        match event {
            InboundEvent::PushData(data) => {
                if let Err(e) = state.router.on_message(session, &data) {
                    tracing::warn!("Dropped message from {}: {}", remote_addr, e);
                }
            }
            InboundEvent::Unknown(name) => {
                tracing::debug!("Ignoring unknown event '{}' from {}", name, remote_addr);
            }
        }
    }
}

/// Write queued frames to the client until the queue closes or a close is requested.
async fn forward_outbound(
    mut sender: SplitSink<WebSocket, Message>,
    mut rx: mpsc::UnboundedReceiver<OutboundFrame>,
    remote_addr: SocketAddr,
) {
    while let Some(frame) = rx.recv().await {
        match frame {
            OutboundFrame::Event(event) => {
                let json = match serde_json::to_string(&OutboundEventDto::from(&event)) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to encode '{}' event: {}", event.name, e);
                        continue;
                    }
                };
                if let Err(e) = sender.send(Message::Text(json.into())).await {
                    tracing::warn!("Failed to send '{}' to {}: {}", event.name, remote_addr, e);
                    break;
                }
            }
            OutboundFrame::Close => {
                let _ = sender.send(Message::Close(None)).await;
                break;
            }
        }
    }
}
