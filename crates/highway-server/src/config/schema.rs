use std::net::SocketAddr;

use serde::Deserialize;
use highway_core::error::{HighwayError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighwayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub report: ReportSection,
}

impl Default for HighwayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            report: ReportSection::default(),
        }
    }
}

impl HighwayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HighwayError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.report.validate()?;

        Ok(())
    }

    /// Parsed listen address (validated by `validate`).
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.server.listen_addr()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            HighwayError::BadRequest(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Overrides for the values reported by `/version`.
///
/// Anything left unset is resolved at startup, see `build_info::resolve`.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub revision: Option<String>,

    /// File whose first line holds the revision (e.g. a deploy-time `REVISION`).
    #[serde(default)]
    pub revision_file: Option<String>,
}

impl ReportSection {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("report.hostname", &self.hostname),
            ("report.version", &self.version),
            ("report.revision", &self.revision),
            ("report.revision_file", &self.revision_file),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(HighwayError::BadRequest(format!("{field} must not be empty")));
            }
        }
        if self.revision.is_some() && self.revision_file.is_some() {
            return Err(HighwayError::BadRequest(
                "report.revision and report.revision_file are mutually exclusive".into(),
            ));
        }
        Ok(())
    }
}
