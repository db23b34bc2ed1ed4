//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{
    AuthoredReportResponse, DashboardStatsResponse, ReportResponse, UserResponse,
};
use crate::domain::report::{ContentType, Language};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Auth DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Option<UserInfo>,
}

// ============================================================================
// Generation / Export DTOs
// ============================================================================

fn default_content_type() -> String {
    ContentType::default().as_str().to_string()
}

fn default_language() -> String {
    Language::default().as_str().to_string()
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(rename = "type", default = "default_content_type")]
    pub content_type: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub word_count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
    pub source: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SaveTextRequest {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub title: String,
}

/// 演示文稿导出 / 预览请求（JSON 或表单）
#[derive(Debug, Deserialize)]
pub struct PresentationRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: String,
}

// ============================================================================
// Report DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SaveReportRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default = "default_content_type")]
    pub content_type: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub word_count: u32,
}

#[derive(Debug, Serialize)]
pub struct SaveReportResponse {
    pub report_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ReportDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: u32,
    pub created_at: String,
}

impl From<ReportResponse> for ReportDto {
    fn from(r: ReportResponse) -> Self {
        Self {
            id: r.id,
            title: r.title,
            content: r.content,
            content_type: r.content_type,
            language: r.language,
            word_count: r.word_count,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportsResponse<T: Serialize> {
    pub reports: Vec<T>,
}

// ============================================================================
// Admin DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StatsDto {
    pub user_count: u64,
    pub report_count: u64,
    pub presentation_count: u64,
    pub today_reports: u64,
    pub last_user: Option<String>,
}

impl From<DashboardStatsResponse> for StatsDto {
    fn from(s: DashboardStatsResponse) -> Self {
        Self {
            user_count: s.user_count,
            report_count: s.report_count,
            presentation_count: s.presentation_count,
            today_reports: s.today_reports,
            last_user: s.last_user,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub created_at: String,
}

impl From<UserResponse> for UserDto {
    fn from(u: UserResponse) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize)]
pub struct AuthoredReportDto {
    pub id: i64,
    pub username: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: u32,
    pub created_at: String,
}

impl From<AuthoredReportResponse> for AuthoredReportDto {
    fn from(r: AuthoredReportResponse) -> Self {
        Self {
            id: r.id,
            username: r.username,
            title: r.title,
            content: r.content,
            content_type: r.content_type,
            language: r.language,
            word_count: r.word_count,
            created_at: r.created_at,
        }
    }
}
