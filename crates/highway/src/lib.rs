//! Top-level facade crate for highway.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use highway_core::*;
}

pub mod server {
    pub use highway_server::*;
}
