//! Reportgen - AI 报告与演示文稿生成服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Report Context: 内容类型、语言、字数
//! - User Context: 用户名与密码
//! - Slides: 纯文本到幻灯片的分割
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repositories, ContentGenerator, SessionManager）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态前端
//! - Memory: SessionManager 内存实现
//! - Persistence: SQLite 存储
//! - Adapters: OpenRouter 客户端与模板回退
//! - Export: TXT/DOCX/PDF 导出与 HTML 演示文稿

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
