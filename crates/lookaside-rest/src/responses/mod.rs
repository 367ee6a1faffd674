//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lookaside_core::{ErrorResponse, LookasideError, UserId};
use tracing::warn;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub LookasideError);

impl From<LookasideError> for AppError {
    fn from(err: LookasideError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Parses a path segment into a user id, rejecting anything that is not an integer.
pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    UserId::parse(raw)
        .map_err(|_| AppError(LookasideError::validation(format!("Invalid user id: {}", raw))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42").unwrap(), UserId::new(42));
        assert!(matches!(
            parse_user_id("abc").unwrap_err().0,
            LookasideError::Validation(_)
        ));
        assert!(parse_user_id("").is_err());
    }

    #[test]
    fn test_status_mapping() {
        let not_found = AppError(LookasideError::not_found("User", 7)).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let unavailable = AppError(LookasideError::cache_unavailable("down")).into_response();
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let corrupt = AppError(LookasideError::Serialization("bad".into())).into_response();
        assert_eq!(corrupt.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
