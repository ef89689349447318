//! Data Transfer Objects
//!
//! 统一响应信封与各资源的 JSON 视图

use serde::Serialize;

use crate::application::ports::{ArticleRecord, TagRecord};
use crate::domain::ErrorCode;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式 `{code, msg, data}`
///
/// `msg` 只能由 `code` 查表得到。
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    code: ErrorCode,
    msg: &'static str,
    data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(code: ErrorCode, data: T) -> Self {
        Self {
            code,
            msg: code.message(),
            data,
        }
    }

    /// 成功响应
    pub fn success(data: T) -> Self {
        Self::new(ErrorCode::Success, data)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// 空对象 `{}`
#[derive(Debug, Serialize)]
pub struct Empty {}

/// 列表响应
#[derive(Debug, Serialize)]
pub struct ListData<T: Serialize> {
    pub lists: Vec<T>,
    pub total: i64,
}

// ============================================================================
// Tag / Article
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TagView {
    pub id: i64,
    pub name: String,
    pub created_by: String,
    pub modified_by: String,
    pub state: i64,
    pub created_on: i64,
    pub modified_on: i64,
}

impl From<TagRecord> for TagView {
    fn from(record: TagRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            created_by: record.created_by,
            modified_by: record.modified_by,
            state: record.state,
            created_on: record.created_on,
            modified_on: record.modified_on,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleView {
    pub id: i64,
    pub tag_id: i64,
    pub tag: Option<TagView>,
    pub title: String,
    pub desc: String,
    pub content: String,
    pub cover_image_url: String,
    pub created_by: String,
    pub modified_by: String,
    pub state: i64,
    pub created_on: i64,
    pub modified_on: i64,
}

impl From<ArticleRecord> for ArticleView {
    fn from(record: ArticleRecord) -> Self {
        Self {
            id: record.id,
            tag_id: record.tag_id,
            tag: record.tag.map(TagView::from),
            title: record.title,
            desc: record.desc,
            content: record.content,
            cover_image_url: record.cover_image_url,
            created_by: record.created_by,
            modified_by: record.modified_by,
            state: record.state,
            created_on: record.created_on,
            modified_on: record.modified_on,
        }
    }
}

// ============================================================================
// Auth / Upload / Ping
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TokenData {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UploadData {
    pub image_url: String,
    pub image_save_url: String,
}

#[derive(Debug, Serialize)]
pub struct PingData {
    pub status: &'static str,
    pub version: &'static str,
}
