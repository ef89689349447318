//! SQLite Persistence - SQLite 数据库持久化实现

mod article_repo;
mod database;
mod tag_repo;

pub use article_repo::*;
pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool};
pub use tag_repo::*;
