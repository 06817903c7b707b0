//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Article Context: 文章管理
//! - Author Context: 作者管理
//!
//! 以及共享的 ID 校验、字段约束和发布时间处理

pub mod article;
pub mod author;
pub mod identifier;
pub mod publish_date;
pub mod validation;

pub use identifier::{check_uuid, generate_id, same_identifier, IdentifierError};
pub use publish_date::{PublishDateError, PublishWindow, PUBLISH_DATE_PATTERN};
pub use validation::ConstraintViolation;
