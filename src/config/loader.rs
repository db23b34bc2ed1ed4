//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "REPORTGEN";

/// 加载应用配置
///
/// # 环境变量示例
/// - `REPORTGEN_SERVER__PORT=8080`
/// - `REPORTGEN_GENERATOR__API_KEY=sk-or-...`
/// - `REPORTGEN_DATABASE__PATH=/data/reports.db`
/// - `REPORTGEN_PRESENTATION__TITLE_MARKERS=слайд,slide,кіріспе,қорытынды`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "web")?
        .set_default("generator.api_url", "https://openrouter.ai/api/v1/chat/completions")?
        .set_default("generator.api_key", "")?
        .set_default("generator.model", "openai/gpt-3.5-turbo")?
        .set_default("generator.max_tokens", 4000)?
        .set_default("generator.temperature", 0.7)?
        .set_default("generator.timeout_secs", 60)?
        .set_default("database.path", "data/reports.db")?
        .set_default("database.max_connections", 5)?
        .set_default("admin.username", "admin")?
        .set_default("admin.password", "admin123")?
        .set_default("admin.email", "admin@localhost")?
        .set_default("session.cookie_name", "session")?
        .set_default("session.expire_secs", 86400)?
        .set_default("session.purge_interval_secs", 600)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 层级分隔符: __ ，列表以逗号分隔
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("presentation.title_markers")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let fail = |msg: &str| Err(ConfigError::ValidationError(msg.to_string()));

    if config.server.port == 0 {
        return fail("Server port cannot be 0");
    }

    if config.generator.api_url.trim().is_empty() {
        return fail("Generator API URL cannot be empty");
    }

    if config.database.path.trim().is_empty() {
        return fail("Database path cannot be empty");
    }

    if config.admin.username.trim().is_empty() || config.admin.password.is_empty() {
        return fail("Admin username and password cannot be empty");
    }

    if config.session.cookie_name.trim().is_empty() {
        return fail("Session cookie name cannot be empty");
    }

    if config.session.purge_interval_secs == 0 {
        return fail("Session purge interval cannot be 0");
    }

    Ok(())
}

/// 打印配置信息（不含密钥和密码）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    match config.server.static_dir() {
        Some(dir) => tracing::info!("Static Files: {:?}", dir),
        None => tracing::info!("Static Files: disabled"),
    }
    tracing::info!("Generator URL: {}", config.generator.api_url);
    tracing::info!("Generator Model: {}", config.generator.model);
    tracing::info!(
        "Generator API Key: {}",
        if config.generator.api_key.is_empty() { "not set (template fallback only)" } else { "set" }
    );
    tracing::info!("Generator Timeout: {}s", config.generator.timeout_secs);
    tracing::info!("Database: {}", config.database.path);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Admin: {}", config.admin.username);
    tracing::info!("Session Expire: {}s", config.session.expire_secs);
    tracing::info!("Session Purge Interval: {}s", config.session.purge_interval_secs);
    tracing::info!("Title Markers: {:?}", config.presentation.title_markers);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
