//! Version report rendering vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

use highway_core::report::{render, render_json, render_plain};
use highway_core::{ResponseFormat, VersionReport};

#[derive(Debug, Deserialize)]
struct Vector {
    description: String,
    report: ReportData,
    plain: String,
    json: String,
}

#[derive(Debug, Deserialize)]
struct ReportData {
    hostname: String,
    version: String,
    revision: String,
}

fn load() -> Vec<Vector> {
    let s = fs::read_to_string("tests/vectors/reports.json").unwrap();
    serde_json::from_str(&s).expect("invalid report vectors")
}

fn report(v: &Vector) -> VersionReport {
    VersionReport::new(&v.report.hostname, &v.report.version, &v.report.revision)
}

#[test]
fn plain_vectors() {
    for v in load() {
        assert_eq!(render_plain(&report(&v)), v.plain, "{}", v.description);
    }
}

#[test]
fn json_vectors() {
    for v in load() {
        assert_eq!(render_json(&report(&v)).unwrap(), v.json, "{}", v.description);
    }
}

#[test]
fn json_has_exactly_three_string_keys() {
    for v in load() {
        let body: serde_json::Value =
            serde_json::from_str(&render(&report(&v), ResponseFormat::Json).unwrap()).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 3, "{}", v.description);
        assert_eq!(obj["version"], v.report.version.as_str());
        assert_eq!(obj["revision"], v.report.revision.as_str());
        assert_eq!(obj["Hostname"], v.report.hostname.as_str());
    }
}

#[test]
fn rendering_is_deterministic() {
    for v in load() {
        let r = report(&v);
        for format in [ResponseFormat::PlainText, ResponseFormat::Json] {
            assert_eq!(render(&r, format).unwrap(), render(&r, format).unwrap());
        }
    }
}
