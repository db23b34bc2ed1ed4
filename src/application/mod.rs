//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、ContentGenerator、SessionManager）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // User commands
    LoginUser,
    Logout,
    RegisterUser,
    // Report commands
    GenerateContent,
    SaveReport,
    // Handlers
    handlers::{
        GenerateContentHandler, GenerateContentResponse, GenerationSource, LoginUserHandler,
        LoginUserResponse, LogoutHandler, RegisterUserHandler, RegisterUserResponse,
        SaveReportHandler, SaveReportResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Repositories
    AuthoredReport,
    NewReport,
    NewUser,
    ReportRecord,
    ReportRepositoryPort,
    ReportStats,
    RepositoryError,
    UserRecord,
    UserRepositoryPort,
    // Content generator
    ContentGeneratorPort,
    GenerationRequest,
    GeneratorError,
    // Session manager
    Session,
    SessionError,
    SessionManagerPort,
};

pub use queries::{
    // Report queries
    GetUserReport,
    ListUserReports,
    // Admin queries
    GetDashboardStats,
    ListAllReports,
    ListUsers,
    // Handlers
    handlers::{
        AuthoredReportResponse, DashboardStatsResponse, GetDashboardStatsHandler,
        GetUserReportHandler, ListAllReportsHandler, ListUserReportsHandler, ListUsersHandler,
        ReportResponse, UserResponse,
    },
};
