//! `NegotiatedFormat` extractor.
//!
//! Gathers the three format sources of a request (path suffix, `format`
//! query value, `Accept` header) and resolves them through
//! `ResponseFormat::negotiate`. Unsupported formats reject with 406, an
//! unparseable query string with 400.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::{header::ACCEPT, request::Parts, HeaderMap, Uri},
};
use highway_core::error::HighwayError;
use highway_core::ResponseFormat;

use crate::{app_state::AppState, error::ApiError};

/// Response format chosen for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegotiatedFormat(pub ResponseFormat);

/// Extension of the last path segment, e.g. `json` for `/version.json`.
pub fn path_suffix(uri: &Uri) -> Option<&str> {
    let last = uri.path().rsplit('/').next()?;
    last.rsplit_once('.').map(|(_, ext)| ext)
}

/// Value of the `format` query key; the last one wins when repeated.
fn query_format(uri: &Uri) -> Result<Option<String>, HighwayError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|e| HighwayError::BadRequest(format!("invalid query string: {e}")))?;
    Ok(pairs
        .into_iter()
        .rev()
        .find(|(k, _)| k == "format")
        .map(|(_, v)| v))
}

/// All `Accept` values joined, so repeated headers act as one list.
fn accept_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for NegotiatedFormat {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let suffix = path_suffix(&parts.uri);
        let query = query_format(&parts.uri).map_err(|e| {
            state.metrics().negotiation_failures.inc(&[("reason", "query")]);
            ApiError(e)
        })?;
        let accept = accept_header(&parts.headers);

        match ResponseFormat::negotiate(suffix, query.as_deref(), accept.as_deref()) {
            Ok(format) => Ok(NegotiatedFormat(format)),
            Err(e) => {
                let reason = if query.as_deref().is_some_and(|q| !q.is_empty()) { "query" } else { "accept" };
                state.metrics().negotiation_failures.inc(&[("reason", reason)]);
                tracing::debug!(error = %e, ?suffix, ?query, ?accept, "format negotiation failed");
                Err(ApiError(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_of_last_segment_only() {
        assert_eq!(path_suffix(&Uri::from_static("/version.json")), Some("json"));
        assert_eq!(path_suffix(&Uri::from_static("/version")), None);
        assert_eq!(path_suffix(&Uri::from_static("/v1.2/version")), None);
        assert_eq!(path_suffix(&Uri::from_static("/version.txt?format=json")), Some("txt"));
    }

    #[test]
    fn query_value() {
        let q = |uri: &'static str| query_format(&Uri::from_static(uri)).unwrap();
        assert_eq!(q("/version?format=json&x=1").as_deref(), Some("json"));
        assert_eq!(q("/version?x=1"), None);
        assert_eq!(q("/version"), None);
    }

    #[test]
    fn repeated_query_key_takes_last() {
        let q = |uri: &'static str| query_format(&Uri::from_static(uri)).unwrap();
        assert_eq!(q("/version?format=json&format=json").as_deref(), Some("json"));
        assert_eq!(q("/version?format=xml&format=json").as_deref(), Some("json"));
        assert_eq!(q("/version?format=json&format=html").as_deref(), Some("html"));
    }

    #[test]
    fn repeated_accept_headers_join() {
        let mut h = HeaderMap::new();
        h.append(ACCEPT, "text/html;q=0.1".parse().unwrap());
        h.append(ACCEPT, "application/json".parse().unwrap());
        assert_eq!(
            accept_header(&h).as_deref(),
            Some("text/html;q=0.1,application/json")
        );
        assert_eq!(accept_header(&HeaderMap::new()), None);
    }
}
