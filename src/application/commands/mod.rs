//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod report_commands;
mod user_commands;

pub mod handlers;

pub use report_commands::*;
pub use user_commands::*;
