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

/// 加载应用配置
///
/// # 环境变量示例
/// - `NEWSDESK_SERVER__HOST=127.0.0.1`
/// - `NEWSDESK_SERVER__PORT=8080`
/// - `NEWSDESK_DATABASE__PATH=/data/newsdesk.db`
/// - `NEWSDESK_PAGINATION__MAX_SIZE=50`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索工作目录下的 config.toml / config.local.toml
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.body_limit_bytes", 1024 * 1024)?
        .set_default("database.path", "data/newsdesk.db")?
        .set_default("database.max_connections", 5)?
        .set_default("pagination.default_size", 20)?
        .set_default("pagination.max_size", 100)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量，例如 NEWSDESK_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("NEWSDESK")
            .prefix_separator("_")
            .separator("__")
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
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max_connections cannot be 0".to_string(),
        ));
    }

    let pagination = &config.pagination;
    if pagination.default_size == 0 || pagination.default_size > pagination.max_size {
        return Err(ConfigError::ValidationError(format!(
            "Pagination default_size must be between 1 and max_size ({})",
            pagination.max_size
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Body Limit: {} bytes", config.server.body_limit_bytes);
    tracing::info!("Database: {}", config.database.path);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!(
        "Page Size: default {}, max {}",
        config.pagination.default_size,
        config.pagination.max_size
    );
    tracing::info!("Log Level: {} (json: {})", config.log.level, config.log.json);
    tracing::info!("=================================");
}
