//! SQLite Article Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::database::map_db_error;
use super::DbPool;
use crate::application::ports::{
    ArticleRecord, ArticleRepositoryPort, RepositoryError, TagRecord,
};
use crate::domain::{ArticleFilter, NewArticle, Pagination};

const SELECT_ARTICLES: &str = r#"
    SELECT a.id, a.tag_id, a.title, a.description, a.content, a.cover_image_url,
           a.created_on, a.created_by, a.modified_on, a.modified_by, a.state,
           t.id AS t_id, t.name AS t_name, t.created_on AS t_created_on,
           t.created_by AS t_created_by, t.modified_on AS t_modified_on,
           t.modified_by AS t_modified_by, t.state AS t_state
    FROM articles a
    LEFT JOIN tags t ON t.id = a.tag_id
"#;

/// SQLite Article Repository
pub struct SqliteArticleRepository {
    pool: DbPool,
}

impl SqliteArticleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ArticleRow {
    id: i64,
    tag_id: i64,
    title: String,
    description: String,
    content: String,
    cover_image_url: String,
    created_on: i64,
    created_by: String,
    modified_on: i64,
    modified_by: String,
    state: i64,
    t_id: Option<i64>,
    t_name: Option<String>,
    t_created_on: Option<i64>,
    t_created_by: Option<String>,
    t_modified_on: Option<i64>,
    t_modified_by: Option<String>,
    t_state: Option<i64>,
}

impl From<ArticleRow> for ArticleRecord {
    fn from(row: ArticleRow) -> Self {
        let tag = row.t_id.map(|id| TagRecord {
            id,
            name: row.t_name.unwrap_or_default(),
            created_by: row.t_created_by.unwrap_or_default(),
            modified_by: row.t_modified_by.unwrap_or_default(),
            state: row.t_state.unwrap_or_default(),
            created_on: row.t_created_on.unwrap_or_default(),
            modified_on: row.t_modified_on.unwrap_or_default(),
        });

        ArticleRecord {
            id: row.id,
            tag_id: row.tag_id,
            tag,
            title: row.title,
            desc: row.description,
            content: row.content,
            cover_image_url: row.cover_image_url,
            created_by: row.created_by,
            modified_by: row.modified_by,
            state: row.state,
            created_on: row.created_on,
            modified_on: row.modified_on,
        }
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &ArticleFilter) {
    let mut sep = " WHERE ";
    if let Some(tag_id) = filter.tag_id {
        qb.push(sep).push("a.tag_id = ").push_bind(tag_id);
        sep = " AND ";
    }
    if let Some(state) = filter.state {
        qb.push(sep).push("a.state = ").push_bind(state);
    }
}

#[async_trait]
impl ArticleRepositoryPort for SqliteArticleRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM articles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(found.is_some())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ArticleRecord>, RepositoryError> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_ARTICLES);
        qb.push(" WHERE a.id = ").push_bind(id);

        let row: Option<ArticleRow> = qb
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(ArticleRecord::from))
    }

    async fn count(&self, filter: &ArticleFilter) -> Result<i64, RepositoryError> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM articles a");
        push_filter(&mut qb, filter);

        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: Pagination,
    ) -> Result<Vec<ArticleRecord>, RepositoryError> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_ARTICLES);
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY a.id ASC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<ArticleRow> = qb
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ArticleRecord::from).collect())
    }

    async fn insert(
        &self,
        article: &NewArticle,
        now: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO articles (
                tag_id, title, description, content, cover_image_url,
                created_on, created_by, modified_on, modified_by, state
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, 0, '', ?)
            "#,
        )
        .bind(article.tag_id)
        .bind(&article.title)
        .bind(&article.desc)
        .bind(&article.content)
        .bind(&article.cover_image_url)
        .bind(now.timestamp())
        .bind(&article.created_by)
        .bind(article.state)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteArticleRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteArticleRepository::new(pool)
    }

    fn article(tag_id: i64, title: &str, state: i64) -> NewArticle {
        NewArticle {
            tag_id,
            title: title.to_string(),
            desc: "d".to_string(),
            content: "c".to_string(),
            created_by: "ann".to_string(),
            cover_image_url: "http://img/a.png".to_string(),
            state,
        }
    }

    fn titles(rows: &[ArticleRecord]) -> Vec<&str> {
        rows.iter().map(|r| r.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_pages_follow_creation_order() {
        let repo = repo().await;
        for title in ["a", "b", "c", "d", "e"] {
            repo.insert(&article(1, title, 1), Utc::now()).await.unwrap();
        }
        let all = ArticleFilter::default();

        let first = repo.list(&all, Pagination::new(0, 2)).await.unwrap();
        assert_eq!(titles(&first), vec!["a", "b"]);

        let second = repo.list(&all, Pagination::new(1, 2)).await.unwrap();
        assert_eq!(titles(&second), vec!["c", "d"]);

        let last = repo.list(&all, Pagination::new(2, 2)).await.unwrap();
        assert_eq!(titles(&last), vec!["e"]);

        let past_end = repo.list(&all, Pagination::new(10, 2)).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_unset_tag_filter_differs_from_zero() {
        let repo = repo().await;
        repo.insert(&article(0, "untagged", 1), Utc::now()).await.unwrap();
        repo.insert(&article(3, "tagged", 1), Utc::now()).await.unwrap();

        let unset = ArticleFilter::default();
        assert_eq!(repo.count(&unset).await.unwrap(), 2);

        let zero = ArticleFilter {
            tag_id: Some(0),
            state: None,
        };
        assert_eq!(repo.count(&zero).await.unwrap(), 1);
        let rows = repo.list(&zero, Pagination::new(0, 10)).await.unwrap();
        assert_eq!(titles(&rows), vec!["untagged"]);
    }

    #[tokio::test]
    async fn test_combined_filters() {
        let repo = repo().await;
        repo.insert(&article(1, "a", 1), Utc::now()).await.unwrap();
        repo.insert(&article(1, "b", 0), Utc::now()).await.unwrap();
        repo.insert(&article(2, "c", 1), Utc::now()).await.unwrap();

        let filter = ArticleFilter {
            tag_id: Some(1),
            state: Some(1),
        };
        assert_eq!(repo.count(&filter).await.unwrap(), 1);
        let rows = repo.list(&filter, Pagination::new(0, 10)).await.unwrap();
        assert_eq!(titles(&rows), vec!["a"]);
    }

    #[tokio::test]
    async fn test_find_by_id_without_tag_row() {
        let repo = repo().await;
        let id = repo.insert(&article(9, "lonely", 1), Utc::now()).await.unwrap();
        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.tag_id, 9);
        assert_eq!(found.tag, None);
        assert!(repo.exists_by_id(id).await.unwrap());
        assert!(!repo.exists_by_id(id + 1).await.unwrap());
        assert!(repo.find_by_id(id + 1).await.unwrap().is_none());
    }
}
