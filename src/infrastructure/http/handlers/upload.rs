//! Upload Handler - 图片上传

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::ImageStorageError;
use crate::domain::ErrorCode;
use crate::infrastructure::http::dto::{Envelope, UploadData};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 图片所在的表单字段
const IMAGE_FIELD: &str = "image";

/// 上传图片（multipart 字段 `image`）
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Envelope<UploadData>>, ApiError> {
    let unreadable = ApiError::fault_with(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Error);
    let mut multipart = multipart.map_err(unreadable)?;

    let mut image: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await.map_err(read_failed)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(read_failed)?;
        image = Some((file_name, data.to_vec()));
        break;
    }

    let Some((file_name, data)) = image else {
        return Err(ApiError::rejected(
            StatusCode::BAD_REQUEST,
            ErrorCode::InvalidParams,
        ));
    };

    let storage = &state.image_storage;

    if let Err(err) = storage.check(&file_name, data.len()) {
        tracing::info!(file_name = %file_name, error = %err, "Image rejected");
        return Err(ApiError::rejected(
            StatusCode::BAD_REQUEST,
            ErrorCode::UploadCheckImageFormat,
        ));
    }

    storage.ensure_dir().await.map_err(ApiError::fault_with(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::UploadCheckImageFail,
    ))?;

    let stored = storage
        .save(&file_name, &data)
        .await
        .map_err(|err: ImageStorageError| {
            ApiError::fault(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::UploadSaveImageFail,
                err,
            )
        })?;

    tracing::info!(save_path = %stored.save_path, size = data.len(), "Image uploaded");

    Ok(Json(Envelope::success(UploadData {
        image_url: stored.url,
        image_save_url: stored.save_path,
    })))
}

/// 请求体超过上限属于图片过大，其余读取错误按服务端故障处理
fn read_failed(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::info!(error = %err, "Image exceeds body limit");
        ApiError::rejected(StatusCode::BAD_REQUEST, ErrorCode::UploadCheckImageFormat)
    } else {
        ApiError::fault(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Error, err)
    }
}
