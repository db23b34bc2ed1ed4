//! Admin HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetDashboardStats, ListAllReports, ListUsers};
use crate::infrastructure::http::auth::AdminUser;
use crate::infrastructure::http::dto::{
    ApiResponse, AuthoredReportDto, ReportsResponse, StatsDto, UserDto, UsersResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 统计面板
pub async fn admin_stats(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<StatsDto>>, ApiError> {
    let stats = state.dashboard_stats_handler.handle(GetDashboardStats).await?;
    Ok(Json(ApiResponse::success(StatsDto::from(stats))))
}

/// 所有用户
pub async fn admin_users(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<UsersResponse>>, ApiError> {
    let users = state
        .list_users_handler
        .handle(ListUsers)
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok(Json(ApiResponse::success(UsersResponse { users })))
}

/// 所有报告（含作者）
pub async fn admin_reports(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<ReportsResponse<AuthoredReportDto>>>, ApiError> {
    let reports = state
        .list_all_reports_handler
        .handle(ListAllReports)
        .await?
        .into_iter()
        .map(AuthoredReportDto::from)
        .collect();

    Ok(Json(ApiResponse::success(ReportsResponse { reports })))
}
