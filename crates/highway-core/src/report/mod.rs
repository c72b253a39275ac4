//! Version report model and its two wire renderings.
//!
//! - `format`: negotiated response format (`PlainText` / `Json`)
//! - `render`: exact bodies for each format

pub mod format;
pub mod render;

pub use format::ResponseFormat;
pub use render::{render, render_json, render_plain};

/// Immutable snapshot of the values reported by `/version`.
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    /// Host the process runs on.
    pub hostname: String,
    /// Release version string.
    pub version: String,
    /// Source-control revision id.
    pub revision: String,
}

impl VersionReport {
    pub fn new(
        hostname: impl Into<String>,
        version: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            version: version.into(),
            revision: revision.into(),
        }
    }
}
