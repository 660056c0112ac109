// File: crates/tick-core/src/plan.rs
// Summary: Tick plan constants with validation and the derived growth rate.

use crate::error::TickError;
use crate::step::Ticks;

/// Byte granule for axis ticks: start value, minimum step, and alignment width.
pub const GRANULE: usize = 4;
/// Default byte span the axis covers.
pub const SPAN: usize = 128 * 1024 * 1024;
/// Default number of requested tick positions.
pub const POINTS: usize = 512;

/// The two plan constants: the exclusive byte span to cover and the requested
/// point count. The growth rate is derived so geometric growth reaches the
/// span in roughly `points` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickPlan {
    pub span: usize,
    pub points: usize,
}

impl TickPlan {
    pub const fn new(span: usize, points: usize) -> Self {
        Self { span, points }
    }

    /// Per-step growth rate, `span ** (1 / points)`.
    /// Computed once up front; the iterator never recomputes it.
    pub fn rate(&self) -> f64 {
        (self.span as f64).powf(1.0 / self.points as f64)
    }

    /// Reject constants that cannot yield a usable sequence: zero points would
    /// drive a division by zero in the rate exponent, and a span at or below
    /// the granule would produce an empty sequence silently.
    pub fn validate(&self) -> Result<(), TickError> {
        if self.points == 0 {
            return Err(TickError::InvalidConfiguration(
                "points must be at least 1".into(),
            ));
        }
        if self.span <= GRANULE {
            return Err(TickError::InvalidConfiguration(format!(
                "span must exceed {} bytes, got {}",
                GRANULE, self.span
            )));
        }
        Ok(())
    }

    /// Validate the constants and build the tick sequence.
    pub fn ticks(&self) -> Result<Ticks, TickError> {
        self.validate()?;
        Ok(Ticks::with_rate(GRANULE, self.span, self.rate()))
    }
}

impl Default for TickPlan {
    fn default() -> Self {
        Self::new(SPAN, POINTS)
    }
}
