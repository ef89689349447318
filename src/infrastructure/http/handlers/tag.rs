//! Tag HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::ApplicationError;
use crate::domain::tag::{ADD_TAG_RULES, DELETE_TAG_RULES, EDIT_TAG_RULES, LIST_TAGS_RULES};
use crate::domain::{ErrorCode, NewTag, Pagination, TagChanges, TagFilter};
use crate::infrastructure::http::dto::{Envelope, ListData, TagView};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{bind, Params};
use crate::infrastructure::http::state::AppState;

const STORE_FAULT: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

/// 分页列出标签
pub async fn get_tags(
    State(state): State<Arc<AppState>>,
    Params(params): Params,
) -> Result<Json<Envelope<ListData<TagView>>>, ApiError> {
    let bound = bind(&params, LIST_TAGS_RULES, StatusCode::BAD_REQUEST)?;
    let filter = TagFilter::from_bound(&bound);
    let page = Pagination::from_page_param(params.get("page"), state.page_size);

    let total = state
        .tag_service
        .count(&filter)
        .await
        .map_err(ApiError::fault_with(STORE_FAULT, ErrorCode::CountTagFail))?;

    let tags = state
        .tag_service
        .list(&filter, page)
        .await
        .map_err(ApiError::fault_with(STORE_FAULT, ErrorCode::GetTagsFail))?;

    Ok(Json(Envelope::success(ListData {
        lists: tags.into_iter().map(TagView::from).collect(),
        total,
    })))
}

/// 新增标签
pub async fn add_tag(
    State(state): State<Arc<AppState>>,
    Params(params): Params,
) -> Result<Json<Envelope<()>>, ApiError> {
    let bound = bind(&params, ADD_TAG_RULES, StatusCode::BAD_REQUEST)?;
    let tag = NewTag::from_bound(&bound);

    let exists = state
        .tag_service
        .exists_by_name(&tag.name)
        .await
        .map_err(ApiError::fault_with(STORE_FAULT, ErrorCode::CheckExistTagFail))?;
    if exists {
        return Err(ApiError::rejected(StatusCode::OK, ErrorCode::ExistTag));
    }

    state.tag_service.create(tag).await.map_err(|e| match e {
        ApplicationError::Conflict { .. } => ApiError::rejected(StatusCode::OK, ErrorCode::ExistTag),
        other => ApiError::fault(STORE_FAULT, ErrorCode::AddTagFail, other),
    })?;

    Ok(Json(Envelope::success(())))
}

/// 修改标签
pub async fn edit_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Params,
) -> Result<Json<Envelope<()>>, ApiError> {
    let Params(params) = params.with_path_id(id);
    let bound = bind(&params, EDIT_TAG_RULES, StatusCode::BAD_REQUEST)?;
    let id = bound.int("id").unwrap_or_default();
    let changes = TagChanges::from_bound(&bound);

    ensure_tag_exists(&state, id).await?;

    state.tag_service.edit(id, changes).await.map_err(|e| match e {
        ApplicationError::NotFound { .. } => {
            ApiError::rejected(StatusCode::OK, ErrorCode::NotExistTag)
        }
        ApplicationError::Conflict { .. } => {
            ApiError::rejected(StatusCode::OK, ErrorCode::ExistTag)
        }
        other => ApiError::fault(STORE_FAULT, ErrorCode::EditTagFail, other),
    })?;

    Ok(Json(Envelope::success(())))
}

/// 删除标签
pub async fn delete_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Params,
) -> Result<Json<Envelope<()>>, ApiError> {
    let Params(params) = params.with_path_id(id);
    let bound = bind(&params, DELETE_TAG_RULES, StatusCode::BAD_REQUEST)?;
    let id = bound.int("id").unwrap_or_default();

    ensure_tag_exists(&state, id).await?;

    state.tag_service.delete(id).await.map_err(|e| match e {
        ApplicationError::NotFound { .. } => {
            ApiError::rejected(StatusCode::OK, ErrorCode::NotExistTag)
        }
        other => ApiError::fault(STORE_FAULT, ErrorCode::DeleteTagFail, other),
    })?;

    Ok(Json(Envelope::success(())))
}

async fn ensure_tag_exists(state: &AppState, id: i64) -> Result<(), ApiError> {
    let exists = state
        .tag_service
        .exists_by_id(id)
        .await
        .map_err(ApiError::fault_with(STORE_FAULT, ErrorCode::CheckExistTagFail))?;
    if exists {
        Ok(())
    } else {
        Err(ApiError::rejected(StatusCode::OK, ErrorCode::NotExistTag))
    }
}
