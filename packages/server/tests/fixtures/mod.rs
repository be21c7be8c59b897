//! Test fixtures: a spawned server process and a small WebSocket client.

#![allow(dead_code)]

use std::{
    net::{SocketAddr, TcpStream},
    process::{Child, Command, Stdio},
    thread,
    time::Duration,
};

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream as TokioTcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

const STARTUP_ATTEMPTS: usize = 100;
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Server binary running on a fixed port; killed on drop.
pub struct TestServer {
    child: Child,
    port: u16,
}

impl TestServer {
    pub fn start(port: u16) -> Self {
        let child = Command::new(env!("CARGO_BIN_EXE_pushgate-server"))
            .args(["--port", &port.to_string(), "--log-level", "warn"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn server");

        let server = Self { child, port };
        server.wait_until_ready();
        server
    }

    fn wait_until_ready(&self) {
        for _ in 0..STARTUP_ATTEMPTS {
            if TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("Server did not start on port {}", self.port);
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self, query: &str) -> String {
        format!("ws://127.0.0.1:{}/ws?{}", self.port, query)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Inbound event as seen by a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedEvent {
    pub event: String,
    pub data: String,
}

pub struct TestClient {
    stream: WebSocketStream<MaybeTlsStream<TokioTcpStream>>,
    /// The address the server sees for this client
    pub addr: SocketAddr,
}

impl TestClient {
    pub async fn connect(url: &str) -> Self {
        let (stream, _) = connect_async(url).await.expect("Failed to connect");
        let addr = match stream.get_ref() {
            MaybeTlsStream::Plain(tcp) => tcp.local_addr().expect("local addr"),
            _ => panic!("unexpected TLS stream"),
        };
        Self { stream, addr }
    }

    /// Wait for the next event envelope.
    pub async fn recv(&mut self) -> ReceivedEvent {
        loop {
            let msg = tokio::time::timeout(RECV_TIMEOUT, self.stream.next())
                .await
                .expect("Timed out waiting for event")
                .expect("Stream ended")
                .expect("WebSocket error");
            if let Message::Text(text) = msg {
                let json: serde_json::Value =
                    serde_json::from_str(text.as_str()).expect("Invalid JSON");
                return ReceivedEvent {
                    event: json["event"].as_str().unwrap_or_default().to_string(),
                    data: json["data"].as_str().unwrap_or_default().to_string(),
                };
            }
        }
    }

    /// Assert nothing arrives within `wait`.
    pub async fn expect_silence(&mut self, wait: Duration) {
        if let Ok(Some(Ok(Message::Text(text)))) =
            tokio::time::timeout(wait, self.stream.next()).await
        {
            panic!("Unexpected event: {}", text.as_str());
        }
    }

    pub async fn send_push_data(&mut self, data: &str) {
        let envelope = serde_json::json!({"event": "push_data_event", "data": data});
        self.stream
            .send(Message::Text(envelope.to_string().into()))
            .await
            .expect("Failed to send");
    }

    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }
}
