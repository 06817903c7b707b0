//! Identifier - 标识符签发与格式校验
//!
//! 所有实体 ID 均为 UUID 文本形式（8-4-4-4-12），
//! 版本位必须为 3 或 4，变体位必须为 8/9/a/b。

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

const UUID_PATTERN: &str = r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[34][0-9a-fA-F]{3}-[89ab][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Invalid uuid")]
    Malformed(String),
}

fn uuid_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(UUID_PATTERN).unwrap())
}

/// 签发新的实体 ID（UUID v4）
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}

/// 是否符合 UUID 文本语法
pub fn is_canonical_uuid(value: &str) -> bool {
    uuid_regex().is_match(value)
}

/// 校验路径参数中的 ID
///
/// 必须在调用任何服务之前执行
pub fn check_uuid(value: &str) -> Result<Uuid, IdentifierError> {
    if !is_canonical_uuid(value) {
        return Err(IdentifierError::Malformed(value.to_string()));
    }
    Uuid::parse_str(value).map_err(|_| IdentifierError::Malformed(value.to_string()))
}

/// 请求体中的 ID 是否与路径 ID 逐字相同（区分大小写）
pub fn same_identifier(path_id: &str, body_id: &str) -> bool {
    path_id == body_id
}
