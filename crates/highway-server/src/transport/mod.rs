//! HTTP transport: format negotiation and the version endpoint.

pub mod format;
pub mod version;
