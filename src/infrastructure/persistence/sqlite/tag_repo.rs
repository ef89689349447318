//! SQLite Tag Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::database::map_db_error;
use super::DbPool;
use crate::application::ports::{RepositoryError, TagRecord, TagRepositoryPort};
use crate::domain::{NewTag, Pagination, TagChanges, TagFilter};

/// SQLite Tag Repository
pub struct SqliteTagRepository {
    pool: DbPool,
}

impl SqliteTagRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TagRow {
    id: i64,
    name: String,
    created_on: i64,
    created_by: String,
    modified_on: i64,
    modified_by: String,
    state: i64,
}

impl From<TagRow> for TagRecord {
    fn from(row: TagRow) -> Self {
        TagRecord {
            id: row.id,
            name: row.name,
            created_by: row.created_by,
            modified_by: row.modified_by,
            state: row.state,
            created_on: row.created_on,
            modified_on: row.modified_on,
        }
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &TagFilter) {
    let mut sep = " WHERE ";
    if let Some(name) = &filter.name {
        qb.push(sep).push("name = ").push_bind(name.clone());
        sep = " AND ";
    }
    if let Some(state) = filter.state {
        qb.push(sep).push("state = ").push_bind(state);
    }
}

#[async_trait]
impl TagRepositoryPort for SqliteTagRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM tags WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(found.is_some())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(found.is_some())
    }

    async fn count(&self, filter: &TagFilter) -> Result<i64, RepositoryError> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM tags");
        push_filter(&mut qb, filter);

        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn list(
        &self,
        filter: &TagFilter,
        page: Pagination,
    ) -> Result<Vec<TagRecord>, RepositoryError> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT id, name, created_on, created_by, modified_on, modified_by, state FROM tags",
        );
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY id ASC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<TagRow> = qb
            .build_query_as::<TagRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TagRecord::from).collect())
    }

    async fn insert(&self, tag: &NewTag, now: DateTime<Utc>) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO tags (name, created_on, created_by, modified_on, modified_by, state)
            VALUES (?, ?, ?, 0, '', ?)
            "#,
        )
        .bind(&tag.name)
        .bind(now.timestamp())
        .bind(&tag.created_by)
        .bind(tag.state)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn update(
        &self,
        id: i64,
        changes: &TagChanges,
        now: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE tags
            SET name = ?, modified_by = ?, modified_on = ?, state = COALESCE(?, state)
            WHERE id = ?
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.modified_by)
        .bind(now.timestamp())
        .bind(changes.state)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("tag {}", id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("tag {}", id)));
        }
        Ok(())
    }
}
