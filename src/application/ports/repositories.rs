//! Repository Ports - 出站端口
//!
//! 定义文章与标签持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{ArticleFilter, NewArticle, NewTag, Pagination, TagChanges, TagFilter};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// Tag Repository
// ============================================================================

/// 标签实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub id: i64,
    pub name: String,
    pub created_by: String,
    pub modified_by: String,
    pub state: i64,
    pub created_on: i64,
    pub modified_on: i64,
}

/// Tag Repository Port
#[async_trait]
pub trait TagRepositoryPort: Send + Sync {
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError>;

    async fn count(&self, filter: &TagFilter) -> Result<i64, RepositoryError>;

    /// 按 id 升序分页
    async fn list(
        &self,
        filter: &TagFilter,
        page: Pagination,
    ) -> Result<Vec<TagRecord>, RepositoryError>;

    /// 返回新标签 id
    async fn insert(&self, tag: &NewTag, now: DateTime<Utc>) -> Result<i64, RepositoryError>;

    /// 标签不存在时返回 NotFound
    async fn update(
        &self,
        id: i64,
        changes: &TagChanges,
        now: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    /// 标签不存在时返回 NotFound
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

// ============================================================================
// Article Repository
// ============================================================================

/// 文章实体，附带所属标签（标签已删除时为 None）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub id: i64,
    pub tag_id: i64,
    pub tag: Option<TagRecord>,
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

/// Article Repository Port
#[async_trait]
pub trait ArticleRepositoryPort: Send + Sync {
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ArticleRecord>, RepositoryError>;

    async fn count(&self, filter: &ArticleFilter) -> Result<i64, RepositoryError>;

    /// 按 id 升序分页
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: Pagination,
    ) -> Result<Vec<ArticleRecord>, RepositoryError>;

    /// 返回新文章 id
    async fn insert(&self, article: &NewArticle, now: DateTime<Utc>)
        -> Result<i64, RepositoryError>;
}
