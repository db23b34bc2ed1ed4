//! Admin Query Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AuthoredReport, ReportRepositoryPort, UserRecord, UserRepositoryPort,
};
use crate::application::queries::{GetDashboardStats, ListAllReports, ListUsers};
use crate::domain::report::{ContentType, Language};

// ============================================================================
// Response DTOs
// ============================================================================

/// 统计响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStatsResponse {
    pub user_count: u64,
    pub report_count: u64,
    pub presentation_count: u64,
    pub today_reports: u64,
    pub last_user: Option<String>,
}

/// 用户响应（不含密码哈希）
#[derive(Debug, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub created_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// 带作者的报告响应
#[derive(Debug, Clone)]
pub struct AuthoredReportResponse {
    pub id: i64,
    pub username: String,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: u32,
    pub created_at: String,
}

impl From<AuthoredReport> for AuthoredReportResponse {
    fn from(item: AuthoredReport) -> Self {
        let report = item.report;
        Self {
            id: report.id,
            username: item.username,
            title: report.title,
            content: report.content,
            content_type: report.content_type,
            language: report.language,
            word_count: report.word_count,
            created_at: report.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetDashboardStats Handler
pub struct GetDashboardStatsHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    report_repo: Arc<dyn ReportRepositoryPort>,
}

impl GetDashboardStatsHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        report_repo: Arc<dyn ReportRepositoryPort>,
    ) -> Self {
        Self {
            user_repo,
            report_repo,
        }
    }

    pub async fn handle(&self, _query: GetDashboardStats) -> Result<DashboardStatsResponse, ApplicationError> {
        let user_count = self.user_repo.count().await?;
        let last_user = self.user_repo.latest_username().await?;
        let stats = self.report_repo.stats(Utc::now().date_naive()).await?;

        Ok(DashboardStatsResponse {
            user_count,
            report_count: stats.total,
            presentation_count: stats.presentations,
            today_reports: stats.today,
            last_user,
        })
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, _query: ListUsers) -> Result<Vec<UserResponse>, ApplicationError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

/// ListAllReports Handler
pub struct ListAllReportsHandler {
    report_repo: Arc<dyn ReportRepositoryPort>,
}

impl ListAllReportsHandler {
    pub fn new(report_repo: Arc<dyn ReportRepositoryPort>) -> Self {
        Self { report_repo }
    }

    pub async fn handle(&self, _query: ListAllReports) -> Result<Vec<AuthoredReportResponse>, ApplicationError> {
        let reports = self.report_repo.find_all_with_author().await?;
        Ok(reports.into_iter().map(AuthoredReportResponse::from).collect())
    }
}
