//! Axum router wiring.
//!
//! `/version` plus its `.html`/`.txt`/`.json` suffixed forms, and the ops
//! endpoints. Other suffixes are not routed.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(transport::version::version))
        .route("/version.html", get(transport::version::version))
        .route("/version.txt", get(transport::version::version))
        .route("/version.json", get(transport::version::version))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
