// File: crates/tick-core/src/step.rs
// Summary: Geometric stepping iterator with a minimum-step floor and alignment masking.

use crate::align::align_down;

/// Lazy, forward-only sequence of byte sizes over `[granule, span)`.
///
/// Each step advances the running value by the larger of one granule or
/// geometric growth at `rate`, then aligns the result down to a multiple of
/// the granule. The floor keeps the sequence strictly increasing, so it
/// terminates for any rate, including rates at or below 1.
#[derive(Clone, Debug)]
pub struct Ticks {
    cur: usize,
    span: usize,
    rate: f64,
    granule: usize,
}

impl Ticks {
    /// Sequence starting at `granule` with an explicit per-step `rate`.
    ///
    /// `granule` must be a power of two; it serves as the start value, the
    /// minimum step, and the alignment width all at once (4 for source-literal
    /// axis ticks, 64 for cache-line sweeps).
    pub fn with_rate(granule: usize, span: usize, rate: f64) -> Self {
        debug_assert!(granule.is_power_of_two());
        Self { cur: granule, span, rate, granule }
    }

    /// Exclusive upper bound of the sequence.
    pub fn span(&self) -> usize { self.span }

    /// Per-step multiplicative rate.
    pub fn rate(&self) -> f64 { self.rate }
}

impl Iterator for Ticks {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cur >= self.span {
            return None;
        }
        let cur = self.cur;

        // Advance at least one granule; geometric growth takes over once it
        // outpaces the floor. The cast truncates, matching an integer floor,
        // and saturates for absurd rates.
        let grown = (cur as f64 * self.rate) as usize;
        let next = align_down(grown.max(cur.saturating_add(self.granule)), self.granule);

        if next <= cur {
            // Pinned at the top of the address space; nothing can advance
            // past the highest aligned size, so the sequence ends here.
            self.cur = self.span;
        } else {
            debug_assert!(next - cur >= self.granule, "step fell below the floor");
            self.cur = next;
        }
        Some(cur)
    }
}
