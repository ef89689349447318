//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、ImageStorage）
//! - services: 文章 / 标签资源服务
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;

pub use ports::{
    ArticleRecord, ArticleRepositoryPort, ImageStorageError, ImageStoragePort, RepositoryError,
    StoredImage, TagRecord, TagRepositoryPort,
};

pub use services::{ArticleService, TagService};
