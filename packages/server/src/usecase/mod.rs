//! UseCase 層
//!
//! イベントルーターとプッシュゲートウェイを実装するレイヤー。
//! UI 層から呼び出され、Domain 層の trait を通してストアを操作します。

pub mod connect_client;
pub mod disconnect_client;
pub mod event_router;
pub mod push_message;
pub mod relay_message;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_support;

pub use connect_client::{ConnectClientUseCase, ConnectOutcome};
pub use disconnect_client::{DisconnectClientUseCase, DisconnectOutcome};
pub use event_router::{EventRouter, Session};
pub use push_message::{PushGateway, PushReceipt};
pub use relay_message::RelayMessageUseCase;
pub use routing::HandshakeRouting;
