//! Session Manager Port - 登录会话管理
//!
//! 定义会话管理的抽象接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session expired: {0}")]
    Expired(String),
}

/// 登录会话（in-memory）
#[derive(Debug, Clone)]
pub struct Session {
    /// 不透明令牌，写入 Cookie
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4().to_string(),
            user_id,
            username: username.into(),
            created_at: now,
            last_activity: now,
        }
    }
}

/// Session Manager Port
///
/// 管理登录会话的生命周期，所有状态存储在内存中
pub trait SessionManagerPort: Send + Sync {
    /// 为用户创建会话，返回令牌
    fn create(&self, user_id: i64, username: &str) -> String;

    /// 获取会话并刷新活动时间；过期会话会被移除
    fn get(&self, token: &str) -> Result<Session, SessionError>;

    /// 关闭会话
    fn close(&self, token: &str) -> Result<(), SessionError>;

    /// 清理所有过期会话，返回清理数量
    fn purge_expired(&self) -> usize;

    /// 当前会话数
    fn count(&self) -> usize;
}
