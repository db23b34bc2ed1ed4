//! Report HTTP Handlers

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::{GetUserReport, ListUserReports, SaveReport};
use crate::domain::report::{ContentType, Language};
use crate::infrastructure::export::{self, report_filename, ExportFormat};
use crate::infrastructure::http::auth::{CurrentUser, MaybeUser};
use crate::infrastructure::http::dto::{
    ApiResponse, ReportDto, ReportsResponse, SaveReportRequest, SaveReportResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonOrForm;
use crate::infrastructure::http::state::AppState;

use super::export::attachment;

const FILE_NOT_FOUND: &str = "Файл табылмады";

/// 保存到个人资料
pub async fn save_report(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    JsonOrForm(req): JsonOrForm<SaveReportRequest>,
) -> Result<Json<ApiResponse<SaveReportResponse>>, ApiError> {
    let result = state
        .save_report_handler
        .handle(SaveReport {
            user_id: user.user_id,
            title: req.title,
            content: req.content,
            content_type: ContentType::from_str(&req.content_type),
            language: Language::from_str(&req.language),
            word_count: req.word_count,
        })
        .await?;

    Ok(Json(ApiResponse::success(SaveReportResponse {
        report_id: result.report_id,
    })))
}

/// 当前用户的报告，未登录时返回空列表
pub async fn get_reports(
    State(state): State<Arc<AppState>>,
    MaybeUser(user): MaybeUser,
) -> Result<Json<ApiResponse<ReportsResponse<ReportDto>>>, ApiError> {
    let reports = match user {
        Some(user) => state
            .list_user_reports_handler
            .handle(ListUserReports {
                user_id: user.user_id,
            })
            .await?
            .into_iter()
            .map(ReportDto::from)
            .collect(),
        None => Vec::new(),
    };

    Ok(Json(ApiResponse::success(ReportsResponse { reports })))
}

/// 下载已保存的报告（txt / docx）
pub async fn download_report(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path((report_id, format)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let not_found = || ApiError::NotFound(FILE_NOT_FOUND.to_string());

    let report_id: i64 = report_id.parse().map_err(|_| not_found())?;
    let format = ExportFormat::for_saved_report(&format).ok_or_else(not_found)?;

    let report = state
        .get_user_report_handler
        .handle(GetUserReport {
            user_id: user.user_id,
            report_id,
        })
        .await
        .map_err(|e| match e {
            crate::application::ApplicationError::NotFound { .. } => not_found(),
            other => other.into(),
        })?;

    let body = match format {
        ExportFormat::Docx => export::docx_for(report.content_type, &report.content, &report.title),
        _ => export::txt(&report.content),
    };

    tracing::info!(
        report_id = report.id,
        user_id = user.user_id,
        format = format.extension(),
        "Report downloaded"
    );

    Ok(attachment(
        body,
        format,
        &report_filename(report.content_type, report.id, format),
    ))
}
