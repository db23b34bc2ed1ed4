//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::{
    default_title_markers, SlideSegmenterConfig, DEFAULT_FALLBACK_TITLE, DEFAULT_MAX_TITLE_CHARS,
    DEFAULT_MIN_BULLET_CHARS,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文本生成服务配置
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 管理员账号
    #[serde(default)]
    pub admin: AdminConfig,

    /// 登录会话配置
    #[serde(default)]
    pub session: SessionConfig,

    /// 幻灯片分割配置
    #[serde(default)]
    pub presentation: PresentationConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置（前端页面）
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default)]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 启用时返回静态文件目录
    pub fn static_dir(&self) -> Option<PathBuf> {
        self.static_files
            .enabled
            .then(|| self.static_files.dir.clone())
    }
}

/// 文本生成服务配置（OpenAI 兼容接口）
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// chat-completions URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API 密钥，为空时直接使用模板回退
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// 请求超时时间（秒）
    #[serde(default = "default_generator_timeout")]
    pub timeout_secs: u64,

    /// HTTP-Referer 头
    #[serde(default = "default_referer")]
    pub referer: String,

    /// X-Title 头
    #[serde(default = "default_app_title")]
    pub app_title: String,
}

fn default_api_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "openai/gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_generator_timeout() -> u64 {
    60
}

fn default_referer() -> String {
    "http://localhost:8000".to_string()
}

fn default_app_title() -> String {
    "AI Report Generator".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_generator_timeout(),
            referer: default_referer(),
            app_title: default_app_title(),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库文件路径
    #[serde(default = "default_db_path")]
    pub path: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "data/reports.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// 获取数据库 URL
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// 管理员账号配置
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,

    #[serde(default = "default_admin_password")]
    pub password: String,

    #[serde(default = "default_admin_email")]
    pub email: String,
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

fn default_admin_email() -> String {
    "admin@localhost".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
            email: default_admin_email(),
        }
    }
}

/// 登录会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Cookie 名称
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// 无活动多久后过期（秒）
    #[serde(default = "default_session_expire")]
    pub expire_secs: u64,

    /// 过期会话清理间隔（秒）
    #[serde(default = "default_purge_interval")]
    pub purge_interval_secs: u64,
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_session_expire() -> u64 {
    86400 // 24 小时
}

fn default_purge_interval() -> u64 {
    600
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            expire_secs: default_session_expire(),
            purge_interval_secs: default_purge_interval(),
        }
    }
}

/// 幻灯片分割配置
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationConfig {
    /// 标题关键字
    #[serde(default = "default_title_markers")]
    pub title_markers: Vec<String>,

    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,

    #[serde(default = "default_min_bullet_chars")]
    pub min_bullet_chars: usize,

    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,
}

fn default_max_title_chars() -> usize {
    DEFAULT_MAX_TITLE_CHARS
}

fn default_min_bullet_chars() -> usize {
    DEFAULT_MIN_BULLET_CHARS
}

fn default_fallback_title() -> String {
    DEFAULT_FALLBACK_TITLE.to_string()
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title_markers: default_title_markers(),
            max_title_chars: default_max_title_chars(),
            min_bullet_chars: default_min_bullet_chars(),
            fallback_title: default_fallback_title(),
        }
    }
}

impl PresentationConfig {
    /// 转换为分割器配置（关键字统一小写）
    pub fn segmenter_config(&self) -> SlideSegmenterConfig {
        SlideSegmenterConfig {
            max_title_chars: self.max_title_chars,
            min_bullet_chars: self.min_bullet_chars,
            fallback_title: self.fallback_title.clone(),
            ..SlideSegmenterConfig::with_markers(&self.title_markers)
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别（RUST_LOG 优先）
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.generator.model, "openai/gpt-3.5-turbo");
        assert_eq!(config.database.path, "data/reports.db");
        assert_eq!(config.admin.username, "admin");
        assert!(config.server.static_dir().is_none());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_database_url() {
        let config = DatabaseConfig::default();
        assert_eq!(config.database_url(), "sqlite:data/reports.db?mode=rwc");
    }

    #[test]
    fn test_segmenter_config() {
        let presentation = PresentationConfig {
            title_markers: vec!["Bölim".to_string()],
            max_title_chars: 40,
            ..Default::default()
        };
        let segmenter = presentation.segmenter_config();
        assert_eq!(segmenter.title_markers, vec!["bölim".to_string()]);
        assert_eq!(segmenter.max_title_chars, 40);
        assert_eq!(segmenter.min_bullet_chars, DEFAULT_MIN_BULLET_CHARS);

        assert_eq!(
            PresentationConfig::default().segmenter_config(),
            SlideSegmenterConfig::default()
        );
    }
}
