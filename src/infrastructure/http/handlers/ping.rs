//! Ping Handler
//!
//! 健康检查，不需要鉴权

use axum::Json;

use crate::infrastructure::http::dto::{Envelope, PingData};

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<Envelope<PingData>> {
    Json(Envelope::success(PingData {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
