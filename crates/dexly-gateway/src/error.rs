// ── Gateway error boundary ──
//
// Every upstream failure stops here and leaves as a 500 with a JSON
// `{error, details}` body. Nothing is re-thrown past the handler.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Which forwarded endpoint failed; decides the `error` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    List,
    Detail,
    Types,
}

impl Endpoint {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to fetch Pokemon list",
            Self::Detail => "Failed to fetch Pokemon",
            Self::Types => "Failed to fetch Pokemon types",
        }
    }
}

#[derive(Debug, Error)]
#[error("{}: {source}", .endpoint.failure_message())]
pub struct GatewayError {
    pub endpoint: Endpoint,
    #[source]
    pub source: dexly_api::Error,
}

impl GatewayError {
    pub fn new(endpoint: Endpoint, source: dexly_api::Error) -> Self {
        Self { endpoint, source }
    }
}

/// Body of every failed gateway response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub details: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        warn!(endpoint = ?self.endpoint, error = %self.source, "upstream request failed");
        let body = ErrorBody {
            error: self.endpoint.failure_message(),
            details: self.source.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
