use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to encode handshake query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}
