//! Startup resolution of the reported hostname, version and revision.
//!
//! Resolution order per value:
//! - hostname: `report.hostname`, else the system hostname
//! - version:  `report.version`, else the crate version baked in at build time
//! - revision: `report.revision`, else the first line of `report.revision_file`,
//!   else `HIGHWAY_REVISION` at build time, else `"unknown"`

use std::fs;

use highway_core::error::{HighwayError, Result};
use highway_core::VersionReport;

use crate::config::ReportSection;

pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const UNKNOWN_REVISION: &str = "unknown";

fn build_revision() -> &'static str {
    option_env!("HIGHWAY_REVISION").unwrap_or(UNKNOWN_REVISION)
}

/// Current system hostname.
pub fn system_hostname() -> Result<String> {
    let raw = hostname::get()
        .map_err(|e| HighwayError::Internal(format!("hostname lookup failed: {e}")))?;
    Ok(raw.to_string_lossy().into_owned())
}

/// First non-empty line of a revision file.
pub fn read_revision_file(path: &str) -> Result<String> {
    let s = fs::read_to_string(path)
        .map_err(|e| HighwayError::Internal(format!("read revision file failed ({path}): {e}")))?;
    s.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| HighwayError::BadRequest(format!("revision file is empty: {path}")))
}

pub fn resolve(section: &ReportSection) -> Result<VersionReport> {
    let hostname = match &section.hostname {
        Some(h) => h.clone(),
        None => system_hostname()?,
    };
    let version = section
        .version
        .clone()
        .unwrap_or_else(|| BUILD_VERSION.to_owned());
    let revision = match (&section.revision, &section.revision_file) {
        (Some(r), _) => r.clone(),
        (None, Some(path)) => read_revision_file(path)?,
        (None, None) => build_revision().to_owned(),
    };

    Ok(VersionReport { hostname, version, revision })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn section() -> ReportSection {
        ReportSection {
            hostname: Some("node-1".into()),
            version: Some("2.3.0".into()),
            revision: Some("abc123".into()),
            revision_file: None,
        }
    }

    #[test]
    fn overrides_win() {
        let r = resolve(&section()).unwrap();
        assert_eq!(r, VersionReport::new("node-1", "2.3.0", "abc123"));
    }

    #[test]
    fn defaults_apply() {
        let r = resolve(&ReportSection::default()).unwrap();
        assert_eq!(r.version, BUILD_VERSION);
        assert_eq!(r.revision, build_revision());
        assert!(!r.hostname.is_empty());
    }

    #[test]
    fn revision_file_first_line() {
        let path = std::env::temp_dir().join(format!("highway-rev-{}", std::process::id()));
        fs::write(&path, "\n  deadbeef  \nsecond\n").unwrap();

        let mut s = section();
        s.revision = None;
        s.revision_file = Some(path.to_string_lossy().into_owned());
        let r = resolve(&s).unwrap();
        assert_eq!(r.revision, "deadbeef");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_revision_file_fails() {
        let mut s = section();
        s.revision = None;
        s.revision_file = Some("/nonexistent/highway/REVISION".into());
        let err = resolve(&s).unwrap_err();
        assert_eq!(err.client_code().as_str(), "INTERNAL");
    }
}
