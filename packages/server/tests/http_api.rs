//! HTTP API integration tests.
//!
//! Tests for REST API endpoints (health check, push, room and user inspection).

mod fixtures;
use fixtures::TestServer;

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start(19180);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_push_to_empty_room_succeeds() {
    // テスト項目: メンバーのいないルームへのプッシュは 200 で配送数 0
    // given (前提条件):
    let server = TestServer::start(19181);
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .post(format!("{}/api/push/room", server.base_url()))
        .json(&serde_json::json!({"room_id": "nobody-here", "message": "hello"}))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "hello");
    assert_eq!(body["delivered"], 0);
}

#[tokio::test]
async fn test_push_to_unknown_user_succeeds() {
    // テスト項目: 未登録ユーザーへのプッシュは 200 で配送数 0
    let server = TestServer::start(19182);
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/push/user", server.base_url()))
        .json(&serde_json::json!({"user_id": "ghost", "message": "hi"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["delivered"], 0);
}

#[tokio::test]
async fn test_push_with_empty_id_delivers_nothing() {
    // テスト項目: 空の room_id / user_id へのプッシュも 200 で、配送数は 0 になる
    let server = TestServer::start(19183);
    let client = reqwest::Client::new();

    for (path, body) in [
        ("room", serde_json::json!({"room_id": "", "message": "hello"})),
        ("user", serde_json::json!({"user_id": "", "message": "hello"})),
    ] {
        let response = client
            .post(format!("{}/api/push/{path}", server.base_url()))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["message"], "hello");
        assert_eq!(body["delivered"], 0);
    }

    // 空の roomId でも旧形式のエンドポイントは本文をそのまま返す
    let response = client
        .post(format!("{}/", server.base_url()))
        .query(&[("roomId", ""), ("msgContent", "echo")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "echo");
}

#[tokio::test]
async fn test_legacy_push_echoes_message() {
    // テスト項目: POST /?roomId=..&msgContent=.. はメッセージ本文をそのまま返す
    let server = TestServer::start(19184);
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/", server.base_url()))
        .query(&[("roomId", "lobby"), ("msgContent", "hello world")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "hello world");
}

#[tokio::test]
async fn test_rooms_list_is_empty_without_connections() {
    // テスト項目: 接続がなければルーム一覧は空
    let server = TestServer::start(19185);
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_room_detail_not_found() {
    // テスト項目: メンバーのいないルームの詳細は 404
    let server = TestServer::start(19186);
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/rooms/nonexistent", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_user_detail_not_found() {
    // テスト項目: 未登録ユーザーの詳細は 404
    let server = TestServer::start(19187);
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/users/ghost", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
