//! Auth Handler - 用应用凭证换取 Token

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::auth::AUTH_RULES;
use crate::domain::ErrorCode;
use crate::infrastructure::http::dto::{Envelope, TokenData};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{bind, Params};
use crate::infrastructure::http::state::AppState;

/// 获取 Token（GET / POST `/auth`）
pub async fn get_auth(
    State(state): State<Arc<AppState>>,
    Params(params): Params,
) -> Result<Json<Envelope<TokenData>>, ApiError> {
    let bound = bind(&params, AUTH_RULES, StatusCode::BAD_REQUEST)?;
    let app_key = bound.text("app_key").unwrap_or_default();
    let app_secret = bound.text("app_secret").unwrap_or_default();

    if !state.credentials.matches(app_key, app_secret) {
        return Err(ApiError::unauthorized(
            ErrorCode::Auth,
            format!("unknown app credentials for {:?}", app_key),
        ));
    }

    let token = state.tokens.issue(app_key).map_err(ApiError::fault_with(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::AuthToken,
    ))?;

    tracing::info!(app_key, "Token issued");

    Ok(Json(Envelope::success(TokenData { token })))
}
