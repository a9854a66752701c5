use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use tracing::error;

/// Request-terminating failures. Bodies are plain text, matching the wire contract.
#[derive(Debug)]
pub enum ApiError {
    InvalidId,
    InvalidInput,
    NotFound,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidId => (StatusCode::BAD_REQUEST, "Invalid employee ID").into_response(),
            ApiError::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input").into_response(),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Employee not found").into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let not_found: ApiError = ServiceError::not_found("employee").into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let storage: ApiError = ServiceError::Storage("disk full".into()).into();
        assert_eq!(storage.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(ApiError::InvalidId.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
