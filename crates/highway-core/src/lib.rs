//! highway core: transport-agnostic version reporting primitives.
//!
//! This crate defines the version report, the response formats a client can
//! negotiate, and the exact bodies rendered for each format. It carries no
//! HTTP or runtime dependencies so the server and tests share one contract.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `HighwayError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod report;

/// Shared result type.
pub use error::{Result, HighwayError};
pub use report::{ResponseFormat, VersionReport};
