//! Domain Layer - 领域层
//!
//! - error_code: 错误码目录
//! - validation: 参数绑定与声明式校验
//! - pagination: 分页请求
//! - article / tag: 资源的查询条件、写入参数与校验规则

pub mod article;
pub mod error_code;
pub mod pagination;
pub mod tag;
pub mod validation;

pub use article::{ArticleFilter, NewArticle};
pub use error_code::{message_for, ErrorCode};
pub use pagination::Pagination;
pub use tag::{NewTag, TagChanges, TagFilter};
pub use validation::{validate, Bound, RawParams, Rule, Validated, ValidationResult, Violation};
