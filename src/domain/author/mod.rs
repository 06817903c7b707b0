//! Author Context - 作者限界上下文
//!
//! 职责:
//! - 作者聚合与姓名约束
//! - 作者 ID 签发

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Author, AuthorDraft};
pub use errors::AuthorError;
pub use value_objects::{AuthorId, FirstName, LastName};
