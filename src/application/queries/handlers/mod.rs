//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod article_handlers;
mod author_handlers;

pub use article_handlers::*;
pub use author_handlers::*;
