//! Newsdesk - 新闻文章与作者管理服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Article Context: 文章管理上下文
//! - Author Context: 作者管理上下文
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ArticleRepository, AuthorRepository, 分页）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
