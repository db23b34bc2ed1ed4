//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod admin_handlers;
mod report_handlers;

pub use admin_handlers::*;
pub use report_handlers::*;
