use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::event::ObjectCreatedEvent;
use crate::processor::{BatchFailure, process_batch};
use crop_core::{PipelineError, StorageError};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// オブジェクト作成イベントのバッチを受け取り、到着順に処理する
pub async fn notifications(
    State(state): State<AppState>,
    Json(event): Json<ObjectCreatedEvent>,
) -> Result<Response, AppError> {
    let batch = event.notifications();
    tracing::info!(records = batch.len(), "received object-created event");

    let stored = process_batch(&state.storage, &state.config, &batch).await?;

    let body = serde_json::json!({ "processed": stored.len(), "keys": stored });
    Ok((StatusCode::OK, Json(body)).into_response())
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    TransformFailed(String),
    StorageUnavailable(String),
}

impl From<BatchFailure> for AppError {
    fn from(failure: BatchFailure) -> Self {
        let message = failure.to_string();
        match failure.source {
            PipelineError::Storage(StorageError::NotFound { .. }) => AppError::NotFound(message),
            PipelineError::Storage(StorageError::Transient(_)) => {
                AppError::StorageUnavailable(message)
            }
            PipelineError::Decode(_) | PipelineError::Geometry(_) | PipelineError::Encode(_) => {
                AppError::TransformFailed(message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // どの失敗もバッチ全体の失敗として 5xx を返し、配信側の再配信に委ねる
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::TransformFailed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::StorageUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
