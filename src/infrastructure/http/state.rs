//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    GenerateContentHandler, LoginUserHandler, LogoutHandler, RegisterUserHandler,
    SaveReportHandler,
    // Query handlers
    GetDashboardStatsHandler, GetUserReportHandler, ListAllReportsHandler,
    ListUserReportsHandler, ListUsersHandler,
    // Ports
    ContentGeneratorPort, ReportRepositoryPort, SessionManagerPort, UserRepositoryPort,
};
use crate::domain::SlideSegmenterConfig;

/// 与请求处理相关的运行时选项
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// 管理员用户名
    pub admin_username: String,
    /// 会话 Cookie 名称
    pub cookie_name: String,
    /// 幻灯片分割配置
    pub segmenter: SlideSegmenterConfig,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            cookie_name: "session".to_string(),
            segmenter: SlideSegmenterConfig::default(),
        }
    }
}

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub session_manager: Arc<dyn SessionManagerPort>,
    pub user_repo: Arc<dyn UserRepositoryPort>,
    pub report_repo: Arc<dyn ReportRepositoryPort>,

    // ========== Command Handlers ==========
    pub register_handler: RegisterUserHandler,
    pub login_handler: LoginUserHandler,
    pub logout_handler: LogoutHandler,
    pub generate_handler: GenerateContentHandler,
    pub save_report_handler: SaveReportHandler,

    // ========== Query Handlers ==========
    pub list_user_reports_handler: ListUserReportsHandler,
    pub get_user_report_handler: GetUserReportHandler,
    pub dashboard_stats_handler: GetDashboardStatsHandler,
    pub list_users_handler: ListUsersHandler,
    pub list_all_reports_handler: ListAllReportsHandler,

    // ========== Options ==========
    pub admin_username: String,
    pub cookie_name: String,
    pub segmenter: SlideSegmenterConfig,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        report_repo: Arc<dyn ReportRepositoryPort>,
        generator: Arc<dyn ContentGeneratorPort>,
        fallback_generator: Arc<dyn ContentGeneratorPort>,
        options: AppOptions,
    ) -> Self {
        Self {
            // Ports
            session_manager: session_manager.clone(),
            user_repo: user_repo.clone(),
            report_repo: report_repo.clone(),

            // Command handlers
            register_handler: RegisterUserHandler::new(user_repo.clone()),
            login_handler: LoginUserHandler::new(user_repo.clone(), session_manager.clone()),
            logout_handler: LogoutHandler::new(session_manager.clone()),
            generate_handler: GenerateContentHandler::new(generator, fallback_generator),
            save_report_handler: SaveReportHandler::new(user_repo.clone(), report_repo.clone()),

            // Query handlers
            list_user_reports_handler: ListUserReportsHandler::new(report_repo.clone()),
            get_user_report_handler: GetUserReportHandler::new(report_repo.clone()),
            dashboard_stats_handler: GetDashboardStatsHandler::new(
                user_repo.clone(),
                report_repo.clone(),
            ),
            list_users_handler: ListUsersHandler::new(user_repo.clone()),
            list_all_reports_handler: ListAllReportsHandler::new(report_repo.clone()),

            // Options
            admin_username: options.admin_username,
            cookie_name: options.cookie_name,
            segmenter: options.segmenter,
        }
    }

    pub fn is_admin(&self, username: &str) -> bool {
        username == self.admin_username
    }
}
