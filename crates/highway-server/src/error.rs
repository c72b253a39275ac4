//! HTTP mapping for `HighwayError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use highway_core::error::{ClientCode, HighwayError};
use serde_json::json;
use thiserror::Error;

/// `HighwayError` as returned from handlers and extractors.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub HighwayError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
