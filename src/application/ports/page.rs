//! Pagination - 分页请求与结果

use serde::Serialize;

use crate::domain::validation::ConstraintViolation;

/// 分页请求（page 从 0 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// 分页大小限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

impl PageLimits {
    /// 由查询参数构造分页请求，缺省时使用默认值
    pub fn request(
        &self,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<PageRequest, ConstraintViolation> {
        let size = size.unwrap_or(self.default_size);
        if size == 0 || size > self.max_size {
            return Err(ConstraintViolation::size("size", 1, self.max_size as usize));
        }
        Ok(PageRequest::new(page.unwrap_or(0), size))
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        Self {
            items,
            page_number: request.page,
            page_size: request.size,
            total_count,
        }
    }
}
