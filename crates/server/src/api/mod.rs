use std::{io::ErrorKind, sync::Arc};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use shared::error::{ApiError, ErrorCode};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::app_state::AppState;

pub(crate) fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/data.json", get(data_json));

    let router = match &state.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };
    router.with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Serves the configured data file verbatim; the table client does all parsing.
async fn data_json(
    State(state): State<Arc<AppState>>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    match tokio::fs::read(&state.data_file).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response()),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(data_file = %state.data_file.display(), "benchmark data file is missing");
            Err((
                StatusCode::NOT_FOUND,
                Json(ApiError::new(ErrorCode::NotFound, "data.json not found")),
            ))
        }
        Err(err) => {
            error!(data_file = %state.data_file.display(), error = %err, "failed to read benchmark data file");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, "failed to read data.json")),
            ))
        }
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
