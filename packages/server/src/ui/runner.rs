//! Server runner: routes, listener and graceful shutdown.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::ValueObjectError;

use super::{
    config::ServerArgs,
    handler::{
        get_room_detail, get_rooms, get_user_detail, health_check, legacy_push, push_to_room,
        push_to_user, websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValueObjectError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the axum router for the given state.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(legacy_push))
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/push/room", post(push_to_room))
        .route("/api/push/user", post(push_to_user))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .route("/api/users/{user_id}", get(get_user_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    let app = build_app(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(ServerError::Serve)
}

/// Bind according to `args` and run the server.
pub async fn run(args: ServerArgs) -> Result<(), ServerError> {
    let state = Arc::new(AppState::new(args.routing()?));

    let addr = args.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Push gateway listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws?roomId=<room>&userId=<user>", addr);

    serve(listener, state).await
}
