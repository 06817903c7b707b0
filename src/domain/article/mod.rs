//! Article Context - 文章限界上下文
//!
//! 职责:
//! - 文章聚合与字段约束
//! - 关键词集合
//! - 作者引用（仅 ID）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Article, ArticleDraft};
pub use errors::ArticleError;
pub use value_objects::{ArticleId, ArticleText, Description, Header};
