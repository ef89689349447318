//! Article HTTP Handlers
//!
//! 每个处理器的流程固定：收集参数 → 校验 → 存在性检查 → 调用服务 → 写响应

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use crate::domain::article::{ADD_ARTICLE_RULES, GET_ARTICLE_RULES, LIST_ARTICLES_RULES};
use crate::domain::{ArticleFilter, ErrorCode, NewArticle, Pagination};
use crate::infrastructure::http::dto::{ArticleView, Empty, Envelope, ListData};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{bind, Params};
use crate::infrastructure::http::middleware::AuthenticatedApp;
use crate::infrastructure::http::state::AppState;

/// 获取单篇文章
///
/// 所有失败都以 HTTP 200 返回，由 code 区分。
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Params,
) -> Result<Json<Envelope<ArticleView>>, ApiError> {
    let Params(params) = params.with_path_id(id);
    let bound = bind(&params, GET_ARTICLE_RULES, StatusCode::OK)?;
    let id = bound.int("id").unwrap_or_default();

    let exists = state.article_service.exists_by_id(id).await.map_err(
        ApiError::fault_with(StatusCode::OK, ErrorCode::CheckExistArticleFail),
    )?;
    if !exists {
        return Err(ApiError::rejected(StatusCode::OK, ErrorCode::NotExistArticle));
    }

    let article = state
        .article_service
        .get(id)
        .await
        .map_err(ApiError::fault_with(StatusCode::OK, ErrorCode::GetArticleFail))?;

    Ok(Json(Envelope::success(ArticleView::from(article))))
}

/// 分页列出文章
pub async fn get_articles(
    State(state): State<Arc<AppState>>,
    Params(params): Params,
) -> Result<Json<Envelope<ListData<ArticleView>>>, ApiError> {
    let bound = bind(&params, LIST_ARTICLES_RULES, StatusCode::BAD_REQUEST)?;
    let filter = ArticleFilter::from_bound(&bound);
    let page = Pagination::from_page_param(params.get("page"), state.page_size);

    let total = state.article_service.count(&filter).await.map_err(
        ApiError::fault_with(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::CountArticleFail),
    )?;

    let articles = state.article_service.list(&filter, page).await.map_err(
        ApiError::fault_with(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::GetArticlesFail),
    )?;

    Ok(Json(Envelope::success(ListData {
        lists: articles.into_iter().map(ArticleView::from).collect(),
        total,
    })))
}

/// 新增文章
///
/// 所有结果都以 HTTP 200 返回，data 为 `{}`。
pub async fn add_article(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthenticatedApp>,
    Params(params): Params,
) -> Result<Json<Envelope<Empty>>, ApiError> {
    let bound = bind(&params, ADD_ARTICLE_RULES, StatusCode::OK)
        .map_err(ApiError::with_empty_object)?;
    let article = NewArticle::from_bound(&bound);

    let tag_exists = state
        .tag_service
        .exists_by_id(article.tag_id)
        .await
        .map_err(|e| {
            ApiError::fault(StatusCode::OK, ErrorCode::CheckExistTagFail, e).with_empty_object()
        })?;
    if !tag_exists {
        return Err(
            ApiError::rejected(StatusCode::OK, ErrorCode::NotExistTag).with_empty_object(),
        );
    }

    let tag_id = article.tag_id;
    let id = state.article_service.create(article).await.map_err(|e| {
        ApiError::fault(StatusCode::OK, ErrorCode::Error, e).with_empty_object()
    })?;

    tracing::info!(
        article_id = id,
        tag_id,
        app_key = %caller.app_key,
        "Article created"
    );

    Ok(Json(Envelope::success(Empty {})))
}
