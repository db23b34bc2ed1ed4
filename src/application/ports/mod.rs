//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod content_generator;
mod repositories;
mod session_manager;

pub use content_generator::{ContentGeneratorPort, GenerationRequest, GeneratorError};
pub use repositories::{
    AuthoredReport, NewReport, NewUser, ReportRecord, ReportRepositoryPort, ReportStats,
    RepositoryError, UserRecord, UserRepositoryPort,
};
pub use session_manager::{Session, SessionError, SessionManagerPort};
