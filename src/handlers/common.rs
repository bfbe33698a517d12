use crate::auth::AuthUser;
use crate::errors::ServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::Validate;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Validate request input, surfacing field-level messages to the caller.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ServiceError> {
    input
        .validate()
        .map_err(|e| ServiceError::ValidationError(e.to_string()))
}

/// Reject the request unless the authenticated admin holds the staff flag.
pub fn require_staff(user: &AuthUser) -> Result<(), ServiceError> {
    user.require_staff()
        .map_err(|_| ServiceError::Forbidden("Staff privilege required".to_string()))
}
