//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod export;
pub mod http;
pub mod memory;
pub mod persistence;
pub mod templates;

pub use memory::InMemorySessionManager;
