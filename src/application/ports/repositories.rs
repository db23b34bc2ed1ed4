//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::report::{ContentType, Language};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 新用户（id 由数据库分配）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 创建用户，用户名重复时返回 `Duplicate`
    async fn create(&self, user: &NewUser) -> Result<UserRecord, RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 获取所有用户（按注册时间倒序）
    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError>;

    /// 用户总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 最近注册的用户名
    async fn latest_username(&self) -> Result<Option<String>, RepositoryError>;
}

// ============================================================================
// Report Repository
// ============================================================================

/// 报告实体（用于持久化）
#[derive(Debug, Clone)]
pub struct ReportRecord {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: u32,
    pub created_at: DateTime<Utc>,
}

/// 新报告（id 由数据库分配）
#[derive(Debug, Clone)]
pub struct NewReport {
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: u32,
}

/// 带作者用户名的报告（管理后台使用）
#[derive(Debug, Clone)]
pub struct AuthoredReport {
    pub report: ReportRecord,
    pub username: String,
}

/// 报告统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: u64,
    pub presentations: u64,
    pub today: u64,
}

/// Report Repository Port
#[async_trait]
pub trait ReportRepositoryPort: Send + Sync {
    /// 保存报告
    async fn create(&self, report: &NewReport) -> Result<ReportRecord, RepositoryError>;

    /// 获取用户的所有报告（按创建时间倒序）
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<ReportRecord>, RepositoryError>;

    /// 获取属于指定用户的报告
    async fn find_for_user(
        &self,
        report_id: i64,
        user_id: i64,
    ) -> Result<Option<ReportRecord>, RepositoryError>;

    /// 获取所有报告及作者（按创建时间倒序）
    async fn find_all_with_author(&self) -> Result<Vec<AuthoredReport>, RepositoryError>;

    /// 统计报告数量，`today` 为当日日期（UTC）
    async fn stats(&self, today: NaiveDate) -> Result<ReportStats, RepositoryError>;
}
