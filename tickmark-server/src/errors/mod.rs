pub mod api;

pub use api::ApiError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();

        match &self {
            ApiError::DatabaseError(e) => {
                tracing::error!(error_id = ?error_id, "Database error: {:?}", e);
            }
            ApiError::SerializationError(e) => {
                tracing::error!(error_id = ?error_id, "Serialization error: {:?}", e);
            }
            ApiError::InternalError(e) => {
                tracing::error!(error_id = ?error_id, "Internal error: {:?}", e);
            }
        }

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": "Internal server error",
                "error_id": error_id.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
