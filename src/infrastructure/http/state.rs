//! Application State
//!
//! 处理器共享的服务、端口与运行参数

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{
    ArticleRepositoryPort, ArticleService, ImageStoragePort, TagRepositoryPort, TagService,
};
use crate::auth::{AppCredentials, TokenService};

/// 应用状态
pub struct AppState {
    // ========== Auth ==========
    pub tokens: Arc<TokenService>,
    pub credentials: AppCredentials,

    // ========== Services ==========
    pub article_service: ArticleService,
    pub tag_service: TagService,

    // ========== Upload ==========
    pub image_storage: Arc<dyn ImageStoragePort>,
    /// 已上传图片的静态托管目录
    pub image_dir: PathBuf,

    /// 列表接口每页条数
    pub page_size: u32,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        tag_repo: Arc<dyn TagRepositoryPort>,
        image_storage: Arc<dyn ImageStoragePort>,
        image_dir: PathBuf,
        tokens: TokenService,
        credentials: AppCredentials,
        page_size: u32,
    ) -> Self {
        Self {
            tokens: Arc::new(tokens),
            credentials,
            article_service: ArticleService::new(article_repo),
            tag_service: TagService::new(tag_repo),
            image_storage,
            image_dir,
            page_size,
        }
    }
}
