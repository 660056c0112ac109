// File: crates/tick-core/src/lib.rs
// Summary: Core library entry point; exports public API for tick planning and formatting.

pub mod plan;
pub mod step;
pub mod align;
pub mod format;
pub mod error;

pub use plan::TickPlan;
pub use step::Ticks;
pub use align::{align_down, is_aligned};
pub use format::{byte_label, write_literals};
pub use error::TickError;
