//! Resource Services - 与传输层无关的资源操作

mod article_service;
mod tag_service;

pub use article_service::ArticleService;
pub use tag_service::TagService;
