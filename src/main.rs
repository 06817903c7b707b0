//! Newsdesk - 新闻文章与作者管理服务
//!
//! - Domain: article/, author/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence

use std::sync::Arc;

use newsdesk::config::{load_config, print_config, LogConfig};
use newsdesk::infrastructure::http::{AppState, HttpServer, ServerConfig};
use newsdesk::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteArticleRepository, SqliteAuthorRepository,
};
use tracing_subscriber::EnvFilter;

/// 初始化日志，RUST_LOG 优先于配置文件中的级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},newsdesk={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Newsdesk - article service");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let article_repo = Arc::new(SqliteArticleRepository::new(pool.clone()));
    let author_repo = Arc::new(SqliteAuthorRepository::new(pool));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        config.server.body_limit_bytes,
    );
    let state = AppState::new(article_repo, author_repo, config.pagination.limits());
    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
