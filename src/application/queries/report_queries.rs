//! Report Queries

/// 列出当前用户的报告
#[derive(Debug, Clone)]
pub struct ListUserReports {
    pub user_id: i64,
}

/// 获取当前用户的单个报告（用于下载）
#[derive(Debug, Clone)]
pub struct GetUserReport {
    pub user_id: i64,
    pub report_id: i64,
}
