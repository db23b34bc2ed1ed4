//! Admin Queries

/// 管理后台统计
#[derive(Debug, Clone)]
pub struct GetDashboardStats;

/// 列出所有用户
#[derive(Debug, Clone)]
pub struct ListUsers;

/// 列出所有报告
#[derive(Debug, Clone)]
pub struct ListAllReports;
