//! `GET /version`: hostname, version and revision of this process.
//!
//! HTML requests deliberately receive the plain text body.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::transport::format::NegotiatedFormat;

pub async fn version(
    State(state): State<AppState>,
    NegotiatedFormat(format): NegotiatedFormat,
) -> Response {
    state.metrics().version_requests.inc(&[("format", format.as_str())]);
    tracing::debug!(format = format.as_str(), "version report served");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type()),
            (header::VARY, "Accept"),
        ],
        state.report_body(format),
    )
        .into_response()
}
