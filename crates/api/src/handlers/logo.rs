use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

const LOGO_FILE: &str = "logo.png";

/// POST /api/logo
///
/// Accepts a single multipart field named `logo` and writes it to a fixed
/// path, always overwriting. Process-wide singleton, not tenant-scoped.
pub async fn upload_logo(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut data = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        if field.name() == Some("logo") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(e.to_string()))?;
            data = Some(bytes);
        }
    }

    let data = data.ok_or_else(|| ApiError::Validation("logo file is required".to_string()))?;

    tokio::fs::create_dir_all(&state.upload_dir)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;
    tokio::fs::write(state.upload_dir.join(LOGO_FILE), &data)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok(Json(json!({
        "message": "Logo uploaded successfully!",
        "path": "/uploads/logo.png",
    })))
}

/// GET /api/logo
pub async fn get_logo(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let path = state.upload_dir.join(LOGO_FILE);

    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response()),
        Err(_) => Err(ApiError::NotFound("Logo not found!".to_string())),
    }
}
