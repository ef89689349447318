//! Article Service - 文章的存在性检查、统计、分页与新建
//!
//! 所属标签是否存在由调用方在新建前检查。

use chrono::Utc;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ArticleRecord, ArticleRepositoryPort};
use crate::domain::{ArticleFilter, NewArticle, Pagination};

pub struct ArticleService {
    articles: Arc<dyn ArticleRepositoryPort>,
}

impl ArticleService {
    pub fn new(articles: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self { articles }
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, ApplicationError> {
        Ok(self.articles.exists_by_id(id).await?)
    }

    pub async fn get(&self, id: i64) -> Result<ArticleRecord, ApplicationError> {
        self.articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article", id))
    }

    pub async fn count(&self, filter: &ArticleFilter) -> Result<i64, ApplicationError> {
        Ok(self.articles.count(filter).await?)
    }

    pub async fn list(
        &self,
        filter: &ArticleFilter,
        page: Pagination,
    ) -> Result<Vec<ArticleRecord>, ApplicationError> {
        Ok(self.articles.list(filter, page).await?)
    }

    /// 返回新文章 id
    pub async fn create(&self, article: NewArticle) -> Result<i64, ApplicationError> {
        Ok(self.articles.insert(&article, Utc::now()).await?)
    }
}
