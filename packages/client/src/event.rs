//! Encoding of outgoing and rendering of incoming event envelopes.

use pushgate_server::infrastructure::dto::websocket::{
    InboundEventDto, OutboundEventDto, PUSH_DATA_EVENT,
};

/// Envelope for a line typed by the user.
pub fn encode_push_data(line: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&InboundEventDto {
        event: PUSH_DATA_EVENT.to_string(),
        data: serde_json::Value::String(line.to_string()),
    })
}

/// One display line for a frame received from the server.
pub fn render_frame(text: &str) -> String {
    match serde_json::from_str::<OutboundEventDto>(text) {
        Ok(event) => format!("[{}] {}", event.event, event.data),
        Err(_) => format!("[raw] {text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_push_data() {
        // テスト項目: 入力行が push_data_event のエンベロープになる
        let json: serde_json::Value =
            serde_json::from_str(&encode_push_data("hello").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "push_data_event", "data": "hello"})
        );
    }

    #[test]
    fn test_render_frame() {
        // テスト項目: 受信イベントは [event] data 形式で表示される
        assert_eq!(
            render_frame(r#"{"event":"join","data":"127.0.0.1:1 join room"}"#),
            "[join] 127.0.0.1:1 join room"
        );
        assert_eq!(render_frame("not json"), "[raw] not json");
    }
}
