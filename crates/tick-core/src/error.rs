// File: crates/tick-core/src/error.rs
// Summary: Error type for tick planning.

use thiserror::Error;

/// Failures raised while turning plan constants into a tick sequence.
#[derive(Debug, Error)]
pub enum TickError {
    /// Constants that cannot yield a usable sequence (zero points, span too small).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
