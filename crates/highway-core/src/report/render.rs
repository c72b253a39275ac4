//! Body rendering.
//!
//! The plain body is served even when the client asked for HTML.
//! The JSON body keeps the capitalized `Hostname` key.

use serde::Serialize;

use crate::error::{HighwayError, Result};
use crate::report::{ResponseFormat, VersionReport};

/// Header line of the plain body.
const PLAIN_HEADER: &str = "highway:";

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'a str,
    revision: &'a str,
    #[serde(rename = "Hostname")]
    hostname: &'a str,
}

/// `highway:\n\tHostname: H\n\tVersion: V\n\tRevision: R\n`
pub fn render_plain(report: &VersionReport) -> String {
    format!(
        "{PLAIN_HEADER}\n\tHostname: {}\n\tVersion: {}\n\tRevision: {}\n",
        report.hostname, report.version, report.revision
    )
}

/// `{"version":V,"revision":R,"Hostname":H}`, keys in that order.
pub fn render_json(report: &VersionReport) -> Result<String> {
    let body = JsonReport {
        version: &report.version,
        revision: &report.revision,
        hostname: &report.hostname,
    };
    serde_json::to_string(&body)
        .map_err(|e| HighwayError::Internal(format!("serialize version report failed: {e}")))
}

/// Render the body for a negotiated format.
pub fn render(report: &VersionReport, format: ResponseFormat) -> Result<String> {
    match format {
        ResponseFormat::PlainText => Ok(render_plain(report)),
        ResponseFormat::Json => render_json(report),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample() -> VersionReport {
        VersionReport::new("node-1", "2.3.0", "abc123")
    }

    #[test]
    fn plain_matches_template() {
        assert_eq!(
            render_plain(&sample()),
            "highway:\n\tHostname: node-1\n\tVersion: 2.3.0\n\tRevision: abc123\n"
        );
    }

    #[test]
    fn json_keeps_key_order_and_casing() {
        assert_eq!(
            render_json(&sample()).unwrap(),
            r#"{"version":"2.3.0","revision":"abc123","Hostname":"node-1"}"#
        );
    }

    #[test]
    fn json_hostname_is_a_string() {
        let v: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert!(v["Hostname"].is_string());
    }

    #[test]
    fn json_escapes_values() {
        let r = VersionReport::new("a\"b", "1.0", "x\ny");
        let v: serde_json::Value = serde_json::from_str(&render_json(&r).unwrap()).unwrap();
        assert_eq!(v["Hostname"], "a\"b");
        assert_eq!(v["revision"], "x\ny");
    }

    #[test]
    fn render_dispatches_on_format() {
        let r = sample();
        assert_eq!(render(&r, ResponseFormat::PlainText).unwrap(), render_plain(&r));
        assert_eq!(render(&r, ResponseFormat::Json).unwrap(), render_json(&r).unwrap());
    }
}
