//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! The body is always `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { message: String },

    /// Expected row mutation did not occur (500, message preserved)
    Inconsistent { message: String },

    /// Unexpected database error (500, logged, generic body)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            Self::Inconsistent { message } => {
                tracing::error!("consistency error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound {
                message: format!("cannot locate {} with ID {}", resource, id),
            },
            DbError::Inconsistent { resource, id } => Self::Inconsistent {
                message: format!("cannot delete {} with ID {}", resource, id),
            },
            // Reference data disagreed with the enum; to the client this is
            // the same invalid-type failure as a name outside the set
            DbError::UnknownType { .. } => Self::Validation(ValidationError::Invalid {
                field: "experiment_type",
            }),
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read failed");
        serde_json::from_slice(&bytes).expect("body was not JSON")
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Invalid { field: "type" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid value for 'type' parameter");
    }

    #[tokio::test]
    async fn not_found_is_404_and_names_the_id() {
        let err: ApiError = DbError::NotFound {
            resource: "experiment",
            id: "99999".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "cannot locate experiment with ID 99999");
    }

    #[tokio::test]
    async fn inconsistent_delete_is_500_and_names_the_id() {
        let err: ApiError = DbError::Inconsistent {
            resource: "experiment",
            id: "7".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "cannot delete experiment with ID 7");
    }

    #[tokio::test]
    async fn unknown_type_maps_to_validation() {
        let err: ApiError = DbError::UnknownType {
            name: "obedience".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_error_body_is_generic() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "an internal error occurred");
    }
}
