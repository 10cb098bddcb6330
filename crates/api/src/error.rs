use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use qms_database::DatabaseError;
use serde_json::json;
use thiserror::Error;

/// Handler-level error. Every variant renders as `{"error": <message>}`
/// with the matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing required input, always 400.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Storage failure; the raw driver message is exposed to the client.
    #[error("{0}")]
    Database(String),
}

impl ApiError {
    pub fn company_id_required() -> Self {
        ApiError::Validation("company_id is required".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(message) => ApiError::NotFound(message),
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::Database(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            ApiError::company_id_required().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        let err: ApiError = DatabaseError::not_found("Customer not found").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Customer not found");
    }

    #[test]
    fn driver_errors_map_to_500_with_raw_message() {
        let err: ApiError = DatabaseError::Other("pool timed out".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "pool timed out");
    }
}
