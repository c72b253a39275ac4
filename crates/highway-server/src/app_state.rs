//! Shared application state for the highway server.
//!
//! The version report is resolved once and both response bodies are
//! pre-rendered, so request handling never touches the host or serializer.

use std::sync::Arc;

use bytes::Bytes;
use highway_core::error::Result;
use highway_core::report::render;
use highway_core::{ResponseFormat, VersionReport};

use crate::build_info;
use crate::config::HighwayConfig;
use crate::obs::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: HighwayConfig,
    report: VersionReport,
    plain_body: Bytes,
    json_body: Bytes,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build application state, resolving build info from the config.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: HighwayConfig) -> Result<Self> {
        let report = build_info::resolve(&cfg.report)?;
        Self::with_report(cfg, report)
    }

    /// Build application state around an already resolved report.
    pub fn with_report(cfg: HighwayConfig, report: VersionReport) -> Result<Self> {
        let plain_body = Bytes::from(render(&report, ResponseFormat::PlainText)?);
        let json_body = Bytes::from(render(&report, ResponseFormat::Json)?);

        let metrics = ServerMetrics::default();
        metrics.build_info.set(
            &[
                ("hostname", report.hostname.as_str()),
                ("version", report.version.as_str()),
                ("revision", report.revision.as_str()),
            ],
            1,
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                report,
                plain_body,
                json_body,
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &HighwayConfig {
        &self.inner.cfg
    }

    pub fn report(&self) -> &VersionReport {
        &self.inner.report
    }

    /// Pre-rendered body for a negotiated format.
    pub fn report_body(&self, format: ResponseFormat) -> Bytes {
        match format {
            ResponseFormat::PlainText => self.inner.plain_body.clone(),
            ResponseFormat::Json => self.inner.json_body.clone(),
        }
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
