//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use greeting::GreetingError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The greeting payload could not be produced.
    Greeting(GreetingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Greeting(err) => {
                tracing::error!(error = %err, "failed to build greeting");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<GreetingError> for ApiError {
    fn from(err: GreetingError) -> Self {
        ApiError::Greeting(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_error_maps_to_internal_server_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::from(GreetingError::from(json_err));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
