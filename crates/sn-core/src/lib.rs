//! sn-core: stable foundation for socnet.
//!
//! Contains:
//! - ids (compact arena handles for network members)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SnError, SnResult};
pub use ids::*;
