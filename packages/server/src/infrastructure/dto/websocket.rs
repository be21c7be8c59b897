//! WebSocket message DTOs.
//!
//! Every text frame carries a `{"event": ..., "data": ...}` envelope.

use serde::{Deserialize, Serialize};

use crate::domain::ServerEvent;

/// Event name clients use to send application data
pub const PUSH_DATA_EVENT: &str = "push_data_event";

/// Envelope sent from the server to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEventDto {
    pub event: String,
    pub data: String,
}

impl From<&ServerEvent> for OutboundEventDto {
    fn from(event: &ServerEvent) -> Self {
        Self {
            event: event.name.as_str().to_string(),
            data: event.payload.clone(),
        }
    }
}

/// Envelope sent from a client to the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEventDto {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Decoded inbound frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Application data to relay to the sender's room
    PushData(String),
    /// Any other named event; ignored by the router
    Unknown(String),
}

impl InboundEvent {
    /// Decode a text frame.
    ///
    /// Frames that are not a JSON envelope are treated as raw push data.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<InboundEventDto>(text) {
            Ok(dto) if dto.event == PUSH_DATA_EVENT => Self::PushData(render_data(dto.data)),
            Ok(dto) => Self::Unknown(dto.event),
            Err(e) => {
                tracing::debug!("Inbound frame is not an event envelope ({}), relaying as raw data", e);
                Self::PushData(text.to_string())
            }
        }
    }

    /// Decode a binary frame as raw push data.
    pub fn from_binary(bytes: &[u8]) -> Self {
        Self::PushData(String::from_utf8_lossy(bytes).into_owned())
    }
}

fn render_data(data: serde_json::Value) -> String {
    match data {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventName;

    #[test]
    fn test_outbound_envelope_shape() {
        // テスト項目: 送信イベントが event / data のエンベロープになる
        // given (前提条件):
        let event = ServerEvent::new(EventName::Join, "127.0.0.1:1 join room");

        // when (操作):
        let json = serde_json::to_value(OutboundEventDto::from(&event)).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({"event": "join", "data": "127.0.0.1:1 join room"})
        );
    }

    #[test]
    fn test_decode_push_data_string() {
        // テスト項目: push_data_event の文字列データはそのまま取り出される
        let event = InboundEvent::from_text(r#"{"event":"push_data_event","data":"hello"}"#);
        assert_eq!(event, InboundEvent::PushData("hello".to_string()));
    }

    #[test]
    fn test_decode_push_data_json_object() {
        // テスト項目: 文字列以外のデータは JSON 文字列として描画される
        let event =
            InboundEvent::from_text(r#"{"event":"push_data_event","data":{"temp":21}}"#);
        assert_eq!(event, InboundEvent::PushData(r#"{"temp":21}"#.to_string()));
    }

    #[test]
    fn test_decode_unknown_event() {
        // テスト項目: 未知のイベント名は Unknown になる
        let event = InboundEvent::from_text(r#"{"event":"typing"}"#);
        assert_eq!(event, InboundEvent::Unknown("typing".to_string()));
    }

    #[test]
    fn test_decode_plain_text_and_binary() {
        // テスト項目: JSON でないテキストとバイナリは生データとして扱われる
        assert_eq!(
            InboundEvent::from_text("just text"),
            InboundEvent::PushData("just text".to_string())
        );
        assert_eq!(
            InboundEvent::from_binary(b"bytes"),
            InboundEvent::PushData("bytes".to_string())
        );
    }
}
