//! SQLite Persistence - SQLite 数据库持久化实现

mod article_repo;
mod author_repo;
mod database;

pub use article_repo::*;
pub use author_repo::*;
pub use database::*;
