//! Pagination - 分页请求

/// 分页请求：page_number 从 0 开始，page_size 由服务端配置决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_number: u32,
    page_size: u32,
}

impl Pagination {
    /// page_size 为 0 时按 1 处理
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size: page_size.max(1),
        }
    }

    /// 从客户端的 `page` 参数构造（线上协议从 1 开始计数）
    ///
    /// 缺省、非数字或 <= 0 都视为第一页。
    pub fn from_page_param(raw: Option<&str>, page_size: u32) -> Self {
        let page = raw
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p > 0)
            .map(|p| u32::try_from(p - 1).unwrap_or(u32::MAX))
            .unwrap_or(0);
        Self::new(page, page_size)
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page_number) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}
