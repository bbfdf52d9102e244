use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Error type shared by every handler. Maps one-to-one onto the HTTP
/// responses the API produces; nothing here is retried or escalated.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid authentication credentials")]
    Unauthenticated,

    #[error("user account is inactive")]
    InactiveAccount,

    #[error("admin privileges required")]
    Forbidden,

    #[error("{field}: {rule}")]
    Validation { field: &'static str, rule: String },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(field: &'static str, rule: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            rule: rule.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                self.to_string(),
            ),
            ApiError::InactiveAccount => {
                (StatusCode::BAD_REQUEST, "INACTIVE_ACCOUNT", self.to_string())
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN", self.to_string()),
            ApiError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION", self.to_string())
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT", self.to_string()),
            ApiError::Database(e) => classify_sqlx(e),
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "internal server error".to_string(),
                )
            }
        };

        let body = match &self {
            ApiError::Validation { field, .. } => {
                json!({ "error": message, "code": code, "field": field })
            }
            _ => json!({ "error": message, "code": code }),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, ApiError::Unauthenticated) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

/// RowNotFound becomes 404 and a unique-key violation becomes 409; anything
/// else is a 500 with the detail kept out of the response body.
fn classify_sqlx(e: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match e {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "resource not found".to_string(),
        ),
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => (
            StatusCode::CONFLICT,
            "CONFLICT",
            "duplicate unique key".to_string(),
        ),
        other => {
            error!(error = %other, "database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "internal server error".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_maps_to_401_with_bearer_challenge() {
        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::WWW_AUTHENTICATE)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer")
        );
    }

    #[test]
    fn gate_errors_map_to_their_status_codes() {
        assert_eq!(
            ApiError::InactiveAccount.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("article").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("email already subscribed".into())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn validation_carries_field_and_rule() {
        let err = ApiError::validation("rating", "must be between 1 and 5");
        assert_eq!(err.to_string(), "rating: must be between 1 and 5");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn row_not_found_is_404() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
