//! Response format negotiation.
//!
//! Precedence: path suffix, then `format` query value, then `Accept` header.
//! With none of them present the plain format is served.

use crate::error::{HighwayError, Result};

pub const CONTENT_TYPE_PLAIN: &str = "text/plain";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Format of a `/version` response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseFormat {
    /// Served for html and plain text requests.
    #[default]
    PlainText,
    Json,
}

impl ResponseFormat {
    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::PlainText => "plain",
            ResponseFormat::Json => "json",
        }
    }

    /// Exact `Content-Type` header value for the rendered body.
    pub fn content_type(self) -> &'static str {
        match self {
            ResponseFormat::PlainText => CONTENT_TYPE_PLAIN,
            ResponseFormat::Json => CONTENT_TYPE_JSON,
        }
    }

    /// Map an explicit format token (path suffix or `format` query value).
    pub fn from_token(token: &str) -> Result<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "html" | "text" | "txt" => Ok(ResponseFormat::PlainText),
            "json" => Ok(ResponseFormat::Json),
            other => Err(HighwayError::NotAcceptable(format!("unsupported format: {other}"))),
        }
    }

    /// Map a concrete media type (no parameters) to a format, if supported.
    pub fn from_media_type(media: &str) -> Option<Self> {
        match media.trim().to_ascii_lowercase().as_str() {
            "text/html" | "application/xhtml+xml" | "text/plain" => Some(ResponseFormat::PlainText),
            "application/json" | "text/x-json" | "application/jsonrequest" => {
                Some(ResponseFormat::Json)
            }
            _ => None,
        }
    }

    /// Formats a wildcard range may stand for, in preference order.
    fn wildcard_candidates(media: &str) -> &'static [ResponseFormat] {
        match media {
            "*/*" => &[ResponseFormat::PlainText, ResponseFormat::Json],
            "text/*" => &[ResponseFormat::PlainText],
            "application/*" => &[ResponseFormat::Json],
            _ => &[],
        }
    }

    /// Pick a format from an `Accept` header value.
    ///
    /// Ranges are ordered by `q`; equal weights keep header order and
    /// `q=0` ranges are excluded. A wildcard only selects formats whose
    /// content type no `q=0` range refuses. An empty header means "anything".
    pub fn from_accept(header: &str) -> Result<Self> {
        let ranges: Vec<(String, f32)> = header
            .split(',')
            .filter_map(|range| {
                let mut parts = range.split(';');
                let media = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
                if media.is_empty() {
                    None
                } else {
                    Some((media, quality(parts)))
                }
            })
            .collect();

        if ranges.is_empty() {
            return Ok(ResponseFormat::default());
        }

        let refused = |format: ResponseFormat| {
            ranges
                .iter()
                .any(|(media, q)| *q <= 0.0 && range_matches(media, format.content_type()))
        };

        let mut best: Option<(f32, ResponseFormat)> = None;
        for (media, q) in &ranges {
            if *q <= 0.0 {
                continue;
            }
            let format = match Self::from_media_type(media) {
                Some(format) => format,
                None => match Self::wildcard_candidates(media)
                    .iter()
                    .copied()
                    .find(|f| !refused(*f))
                {
                    Some(format) => format,
                    None => continue,
                },
            };
            match best {
                Some((best_q, _)) if best_q >= *q => {}
                _ => best = Some((*q, format)),
            }
        }

        best.map(|(_, format)| format).ok_or_else(|| {
            HighwayError::NotAcceptable(format!("no supported media range in accept: {header}"))
        })
    }

    /// Resolve the format of a request from its three possible sources.
    pub fn negotiate(
        suffix: Option<&str>,
        query: Option<&str>,
        accept: Option<&str>,
    ) -> Result<Self> {
        if let Some(token) = suffix.filter(|s| !s.is_empty()) {
            return Self::from_token(token);
        }
        if let Some(token) = query.filter(|s| !s.is_empty()) {
            return Self::from_token(token);
        }
        match accept {
            Some(header) => Self::from_accept(header),
            None => Ok(ResponseFormat::default()),
        }
    }
}

/// Whether a lowercase media range covers `content_type`.
fn range_matches(range: &str, content_type: &str) -> bool {
    match range.strip_suffix("/*") {
        Some("*") => true,
        Some(major) => content_type
            .split_once('/')
            .is_some_and(|(ct_major, _)| ct_major == major),
        None => range == content_type,
    }
}

/// `q` parameter of a media range; missing or malformed weights count as 1.
fn quality<'a>(params: impl Iterator<Item = &'a str>) -> f32 {
    for param in params {
        if let Some((key, value)) = param.split_once('=') {
            if key.trim().eq_ignore_ascii_case("q") {
                return value
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|q| q.is_finite())
                    .map(|q| q.clamp(0.0, 1.0))
                    .unwrap_or(1.0);
            }
        }
    }
    1.0
}
