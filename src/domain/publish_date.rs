//! Publish Date - 发布时间格式与检索区间
//!
//! 对外统一使用 `uuuu-MM-dd'T'HH:mm:ss`，精确到秒

use chrono::{NaiveDateTime, Timelike};
use serde::Serializer;
use thiserror::Error;

/// 对外公布的日期格式
pub const PUBLISH_DATE_PATTERN: &str = "uuuu-MM-dd'T'HH:mm:ss";

const CHRONO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishDateError {
    #[error("Date pattern is not matching: {}", PUBLISH_DATE_PATTERN)]
    PatternMismatch(String),

    #[error("You must specify at least one date")]
    MissingBound,
}

/// 解析发布时间
///
/// 各字段位宽固定，`2015-1-1T00:00:00` 之类的写法同样视为不匹配
pub fn parse_publish_date(value: &str) -> Result<NaiveDateTime, PublishDateError> {
    let mismatch = || PublishDateError::PatternMismatch(value.to_string());

    let bytes = value.as_bytes();
    if bytes.len() != 19 {
        return Err(mismatch());
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(mismatch());
    }

    NaiveDateTime::parse_from_str(value, CHRONO_FORMAT).map_err(|_| mismatch())
}

/// 格式化发布时间
pub fn format_publish_date(value: &NaiveDateTime) -> String {
    value.format(CHRONO_FORMAT).to_string()
}

/// 截断到秒
pub fn truncate_to_seconds(value: NaiveDateTime) -> NaiveDateTime {
    value.with_nanosecond(0).unwrap_or(value)
}

/// serde 序列化辅助（`Option<NaiveDateTime>` 字段）
pub fn serialize_optional<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&format_publish_date(date)),
        None => serializer.serialize_none(),
    }
}

/// 发布时间检索区间
///
/// between 两端闭区间；after / before 为开区间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishWindow {
    Between(NaiveDateTime, NaiveDateTime),
    After(NaiveDateTime),
    Before(NaiveDateTime),
}

impl PublishWindow {
    /// 由查询参数构造区间，至少需要一端
    pub fn from_bounds(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self, PublishDateError> {
        let start = start.map(parse_publish_date).transpose()?;
        let end = end.map(parse_publish_date).transpose()?;

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self::Between(start, end)),
            (Some(start), None) => Ok(Self::After(start)),
            (None, Some(end)) => Ok(Self::Before(end)),
            (None, None) => Err(PublishDateError::MissingBound),
        }
    }
}
