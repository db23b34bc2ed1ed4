//! Report Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ReportRecord, ReportRepositoryPort};
use crate::application::queries::{GetUserReport, ListUserReports};
use crate::domain::report::{ContentType, Language};

// ============================================================================
// Response DTOs
// ============================================================================

/// 报告详情响应
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: u32,
    pub created_at: String,
}

impl From<ReportRecord> for ReportResponse {
    fn from(record: ReportRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            content_type: record.content_type,
            language: record.language,
            word_count: record.word_count,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListUserReports Handler
pub struct ListUserReportsHandler {
    report_repo: Arc<dyn ReportRepositoryPort>,
}

impl ListUserReportsHandler {
    pub fn new(report_repo: Arc<dyn ReportRepositoryPort>) -> Self {
        Self { report_repo }
    }

    pub async fn handle(&self, query: ListUserReports) -> Result<Vec<ReportResponse>, ApplicationError> {
        let reports = self.report_repo.find_by_user(query.user_id).await?;
        Ok(reports.into_iter().map(ReportResponse::from).collect())
    }
}

/// GetUserReport Handler
///
/// 报告不属于当前用户时与不存在同样处理
pub struct GetUserReportHandler {
    report_repo: Arc<dyn ReportRepositoryPort>,
}

impl GetUserReportHandler {
    pub fn new(report_repo: Arc<dyn ReportRepositoryPort>) -> Self {
        Self { report_repo }
    }

    pub async fn handle(&self, query: GetUserReport) -> Result<ReportResponse, ApplicationError> {
        let report = self
            .report_repo
            .find_for_user(query.report_id, query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Report", query.report_id))?;

        Ok(ReportResponse::from(report))
    }
}
