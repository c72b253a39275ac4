//! highway server library entry.
//!
//! Wires config, build-info resolution, format negotiation and the version
//! endpoint into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod build_info;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
