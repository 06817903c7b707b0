//! Author Queries

use uuid::Uuid;

/// 获取作者详情查询
#[derive(Debug, Clone)]
pub struct GetAuthor {
    pub author_id: Uuid,
}
