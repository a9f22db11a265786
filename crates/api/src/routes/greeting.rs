//! Root greeting endpoint.

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use greeting::GreetingResponse;

use crate::error::ApiError;

/// GET / — returns the fixed greeting as JSON.
///
/// Request headers, query string and body are ignored.
#[tracing::instrument]
pub async fn home() -> Result<impl IntoResponse, ApiError> {
    metrics::counter!("greeting_requests_total").increment(1);

    let body = greeting::encode(&GreetingResponse::new())?;
    tracing::debug!(bytes = body.len(), "serving greeting");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}
