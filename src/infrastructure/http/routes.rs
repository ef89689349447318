//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                   GET         健康检查
//! - /auth                   GET|POST    用应用凭证换取 Token
//! - /upload                 POST        上传图片
//! - /upload/images/*        GET         已上传图片（静态托管）
//! - /api/v1/tags            GET|POST    列出 / 新增标签        （需鉴权）
//! - /api/v1/tags/:id        PUT|DELETE  修改 / 删除标签        （需鉴权）
//! - /api/v1/articles        GET|POST    列出 / 新增文章        （需鉴权）
//! - /api/v1/articles/:id    GET         获取单篇文章           （需鉴权）

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers;
use super::middleware::auth_middleware;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(state: &AppState) -> Router<Arc<AppState>> {
    let protected = api_routes().route_layer(middleware::from_fn_with_state(
        state.tokens.clone(),
        auth_middleware,
    ));

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/auth", get(handlers::get_auth).post(handlers::get_auth))
        .route("/upload", post(handlers::upload_image))
        .nest_service("/upload/images", ServeDir::new(&state.image_dir))
        .nest("/api/v1", protected)
}

/// 需要鉴权的 API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tags", get(handlers::get_tags).post(handlers::add_tag))
        .route(
            "/tags/:id",
            put(handlers::edit_tag).delete(handlers::delete_tag),
        )
        .route(
            "/articles",
            get(handlers::get_articles).post(handlers::add_article),
        )
        .route("/articles/:id", get(handlers::get_article))
}
