//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod page;
mod repositories;

pub use page::{Page, PageLimits, PageRequest};
pub use repositories::{
    ArticleRecord, ArticleRepositoryPort, AuthorRecord, AuthorRepositoryPort, RepositoryError,
};
