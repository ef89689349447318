//! Inkpad - 文章 / 标签 JSON API
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 错误码目录、参数校验、分页
//! - Article / Tag: 查询条件、写入参数与校验规则
//!
//! 鉴权 (auth/):
//! - TokenService: Token 签发与校验
//! - AppCredentials: 换取 Token 的应用凭证
//!
//! 应用层 (application/):
//! - Ports: Repository、ImageStorage
//! - Services: 文章 / 标签资源服务
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API、鉴权中间件
//! - Persistence: SQLite 存储
//! - Adapters: 图片文件存储

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
