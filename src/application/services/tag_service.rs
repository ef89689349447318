//! Tag Service - 标签的存在性检查、统计、分页与增删改

use chrono::Utc;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{RepositoryError, TagRecord, TagRepositoryPort};
use crate::domain::{NewTag, Pagination, TagChanges, TagFilter};

pub struct TagService {
    tags: Arc<dyn TagRepositoryPort>,
}

impl TagService {
    pub fn new(tags: Arc<dyn TagRepositoryPort>) -> Self {
        Self { tags }
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, ApplicationError> {
        Ok(self.tags.exists_by_id(id).await?)
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, ApplicationError> {
        Ok(self.tags.exists_by_name(name).await?)
    }

    pub async fn count(&self, filter: &TagFilter) -> Result<i64, ApplicationError> {
        Ok(self.tags.count(filter).await?)
    }

    pub async fn list(
        &self,
        filter: &TagFilter,
        page: Pagination,
    ) -> Result<Vec<TagRecord>, ApplicationError> {
        Ok(self.tags.list(filter, page).await?)
    }

    /// 同名标签已存在时返回 Conflict
    pub async fn create(&self, tag: NewTag) -> Result<i64, ApplicationError> {
        if self.tags.exists_by_name(&tag.name).await? {
            return Err(ApplicationError::conflict("Tag", tag.name));
        }

        let id = self.tags.insert(&tag, Utc::now()).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => ApplicationError::conflict("Tag", tag.name.clone()),
            other => other.into(),
        })?;

        tracing::info!(tag_id = id, name = %tag.name, "Tag created");
        Ok(id)
    }

    /// 改名撞上已有标签时返回 Conflict
    pub async fn edit(&self, id: i64, changes: TagChanges) -> Result<(), ApplicationError> {
        self.tags
            .update(id, &changes, Utc::now())
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate(_) => {
                    ApplicationError::conflict("Tag", changes.name.clone())
                }
                other => not_found_or(other, id),
            })?;

        tracing::info!(tag_id = id, modified_by = %changes.modified_by, "Tag updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApplicationError> {
        self.tags.delete(id).await.map_err(|e| not_found_or(e, id))?;

        tracing::info!(tag_id = id, "Tag deleted");
        Ok(())
    }
}

fn not_found_or(err: RepositoryError, id: i64) -> ApplicationError {
    match err {
        RepositoryError::NotFound(_) => ApplicationError::not_found("Tag", id),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTagRepository,
    };

    async fn service() -> TagService {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        TagService::new(Arc::new(SqliteTagRepository::new(pool)))
    }

    fn new_tag(name: &str) -> NewTag {
        NewTag {
            name: name.to_string(),
            created_by: "ann".to_string(),
            state: 1,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let svc = service().await;
        svc.create(new_tag("rust")).await.unwrap();
        let err = svc.create(new_tag("rust")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Conflict { .. }));
        assert_eq!(svc.count(&TagFilter::default()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_edit_missing_tag_is_not_found() {
        let svc = service().await;
        let changes = TagChanges {
            name: "go".to_string(),
            modified_by: "bo".to_string(),
            state: None,
        };
        let err = svc.edit(42, changes).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn test_rename_onto_existing_name_is_conflict() {
        let svc = service().await;
        svc.create(new_tag("a")).await.unwrap();
        let b = svc.create(new_tag("b")).await.unwrap();

        let changes = TagChanges {
            name: "a".to_string(),
            modified_by: "bo".to_string(),
            state: None,
        };
        let err = svc.edit(b, changes).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Conflict { .. }));

        let renamed_to_self = TagChanges {
            name: "b".to_string(),
            modified_by: "bo".to_string(),
            state: None,
        };
        svc.edit(b, renamed_to_self).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_then_exists() {
        let svc = service().await;
        let id = svc.create(new_tag("rust")).await.unwrap();
        assert!(svc.exists_by_id(id).await.unwrap());
        svc.delete(id).await.unwrap();
        assert!(!svc.exists_by_id(id).await.unwrap());
        assert!(matches!(
            svc.delete(id).await.unwrap_err(),
            ApplicationError::NotFound { .. }
        ));
    }
}
