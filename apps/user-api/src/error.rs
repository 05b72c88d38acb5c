use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use user_lib::errors_service::UserServiceError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    Unauthenticated(String),
    Forbidden(String),
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn unauthenticated() -> Self {
        ApiError::Unauthenticated("authentication required".to_string())
    }

    pub fn forbidden() -> Self {
        ApiError::Forbidden("insufficient role for this operation".to_string())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn missing_param(name: &str) -> Self {
        ApiError::BadRequest(format!("{name} parameter is required"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Unauthenticated(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthenticated", Some(msg))
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", Some(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", Some(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg)),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", Some(msg))
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserServiceError> for ApiError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::Validation(msg) => ApiError::BadRequest(msg),
            UserServiceError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            UserServiceError::Internal(err) => ApiError::Internal(err.to_string()),
            _ => ApiError::Internal("unexpected error".to_string()),
        }
    }
}

/// Check if environment is production-like (prod, prod01, prod02, etc.)
pub fn is_prod_like(env: &str) -> bool {
    env.to_lowercase().starts_with("prod")
}

/// Converts a service error to an ApiError, logging internal errors.
/// In production, internal error details are hidden.
pub fn handle_service_error(err: UserServiceError, env: &str, operation: &str) -> ApiError {
    match &err {
        UserServiceError::Internal(_) => {
            tracing::error!(env = %env, error = ?err, operation = %operation, "service error");
            if is_prod_like(env) {
                ApiError::Internal("internal server error".to_string())
            } else {
                ApiError::from(err)
            }
        }
        _ => ApiError::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prod_like_environments() {
        assert!(is_prod_like("prod"));
        assert!(is_prod_like("PROD01"));
        assert!(!is_prod_like("local"));
        assert!(!is_prod_like("test01"));
    }

    #[test]
    fn not_found_service_error_maps_to_404() {
        let err = UserServiceError::user_by_id(7);
        assert_eq!(
            ApiError::from(err),
            ApiError::NotFound("user not found: 7".to_string())
        );
    }

    #[test]
    fn internal_detail_is_hidden_in_prod() {
        let err = UserServiceError::Internal(anyhow::anyhow!("connection refused"));
        let api = handle_service_error(err, "prod01", "find_by_id");
        assert_eq!(
            api,
            ApiError::Internal("internal server error".to_string())
        );
    }
}
