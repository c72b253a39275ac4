//! Server config loader (strict parsing).

pub mod schema;

use std::env::VarError;
use std::fs;
use std::io::ErrorKind;

use highway_core::error::{HighwayError, Result};

pub use schema::{HighwayConfig, ReportSection, ServerSection};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "HIGHWAY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "highway.yaml";

pub fn load_from_file(path: &str) -> Result<HighwayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HighwayError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HighwayConfig> {
    let cfg: HighwayConfig = serde_yaml::from_str(s)
        .map_err(|e| HighwayError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like `load_from_file`, but a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<HighwayConfig> {
    match fs::metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            Ok(HighwayConfig::default())
        }
        _ => load_from_file(path),
    }
}

/// Load the config named by `CONFIG_ENV` (pass `std::env::var(CONFIG_ENV)`).
///
/// Unset falls back to `DEFAULT_CONFIG_PATH`, which may be absent. A set path
/// must exist, and a non-unicode value is an error.
pub fn load_from_env(var: std::result::Result<String, VarError>) -> Result<HighwayConfig> {
    match var {
        Ok(path) => load_from_file(&path),
        Err(VarError::NotPresent) => load_or_default(DEFAULT_CONFIG_PATH),
        Err(VarError::NotUnicode(raw)) => Err(HighwayError::BadRequest(format!(
            "{CONFIG_ENV} is not valid unicode: {}",
            raw.to_string_lossy()
        ))),
    }
}
