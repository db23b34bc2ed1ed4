//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                          GET   健康检查
//! - /api/register                      POST  注册
//! - /api/login                         POST  登录（写入会话 Cookie）
//! - /api/logout                        POST  退出登录
//! - /api/me                            GET   当前用户
//! - /api/generate                      POST  生成论文或演示文稿
//! - /api/save_txt                      POST  导出 TXT
//! - /api/save_docx                     POST  导出 DOCX
//! - /api/save_presentation_docx        POST  导出演示文稿 DOCX（JSON 或表单）
//! - /api/save_presentation_pdf         POST  导出演示文稿 PDF（JSON 或表单）
//! - /api/view_presentation             POST  HTML 幻灯片预览（JSON 或表单）
//! - /api/save_report                   POST  保存到个人资料（需登录）
//! - /api/get_reports                   GET   个人报告列表
//! - /api/download_report/:id/:format   GET   下载已保存报告（需登录）
//! - /api/admin/stats                   GET   统计（管理员）
//! - /api/admin/users                   GET   用户列表（管理员）
//! - /api/admin/reports                 GET   报告列表（管理员）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/me", get(handlers::me))
        .route("/generate", post(handlers::generate))
        .route("/save_txt", post(handlers::save_txt))
        .route("/save_docx", post(handlers::save_docx))
        .route("/save_presentation_docx", post(handlers::save_presentation_docx))
        .route("/save_presentation_pdf", post(handlers::save_presentation_pdf))
        .route("/view_presentation", post(handlers::view_presentation))
        .route("/save_report", post(handlers::save_report))
        .route("/get_reports", get(handlers::get_reports))
        .route("/download_report/:id/:format", get(handlers::download_report))
        .nest("/admin", admin_routes())
}

/// Admin 路由
fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats", get(handlers::admin_stats))
        .route("/users", get(handlers::admin_users))
        .route("/reports", get(handlers::admin_reports))
}
