//! InMemory 実装
//!
//! 2 つのストアは独立した `DashMap` を持ち、片方の操作がもう片方をロックすることはありません。

mod membership;
mod registry;

pub use membership::InMemoryRoomMembership;
pub use registry::InMemoryConnectionRegistry;
