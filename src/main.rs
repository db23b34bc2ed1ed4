//! Reportgen - AI 报告与演示文稿生成服务
//!
//! - Domain: report/, user/, slides
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, persistence, adapters, export

use std::sync::Arc;
use std::time::Duration;

use reportgen::application::SessionManagerPort;
use reportgen::config::{load_config, print_config};
use reportgen::infrastructure::adapters::{
    OpenRouterClient, OpenRouterClientConfig, TemplateGenerator,
};
use reportgen::infrastructure::http::{AppOptions, AppState, HttpServer, ServerConfig};
use reportgen::infrastructure::memory::InMemorySessionManager;
use reportgen::infrastructure::persistence::sqlite::{
    create_pool, ensure_admin, run_migrations, AdminAccount, DatabaseConfig,
    SqliteReportRepository, SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},reportgen={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Reportgen - AI 报告生成服务");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let admin = AdminAccount {
        username: config.admin.username.clone(),
        password: config.admin.password.clone(),
        email: config.admin.email.clone(),
    };
    ensure_admin(&pool, &admin).await?;

    // 创建 Repository 适配器
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let report_repo = Arc::new(SqliteReportRepository::new(pool));

    // 创建文本生成器（OpenRouter + 模板回退）
    let generator_config = OpenRouterClientConfig {
        api_url: config.generator.api_url.clone(),
        api_key: config.generator.api_key.clone(),
        model: config.generator.model.clone(),
        max_tokens: config.generator.max_tokens,
        temperature: config.generator.temperature,
        timeout_secs: config.generator.timeout_secs,
        referer: config.generator.referer.clone(),
        app_title: config.generator.app_title.clone(),
    };
    let generator = OpenRouterClient::new(generator_config)?;
    if !generator.is_configured() {
        tracing::warn!("Generator API key not set, all generations use templates");
    }
    let generator = Arc::new(generator);
    let fallback_generator = Arc::new(TemplateGenerator::new());

    // 创建内存 Session 管理器
    let session_manager = InMemorySessionManager::new(config.session.expire_secs).arc();

    // 定期清理过期会话
    let purge_manager = session_manager.clone();
    let purge_interval = Duration::from_secs(config.session.purge_interval_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(purge_interval);
        loop {
            ticker.tick().await;
            purge_manager.purge_expired();
        }
    });

    // 创建 HTTP 服务器
    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if let Some(dir) = config.server.static_dir() {
        server_config = server_config.with_static_dir(dir);
    }

    let options = AppOptions {
        admin_username: config.admin.username.clone(),
        cookie_name: config.session.cookie_name.clone(),
        segmenter: config.presentation.segmenter_config(),
    };
    let state = AppState::new(
        session_manager,
        user_repo,
        report_repo,
        generator,
        fallback_generator,
        options,
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
