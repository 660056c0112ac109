// File: crates/tick-core/src/align.rs
// Summary: Power-of-two alignment helpers for byte sizes.

/// Round `value` down to the nearest multiple of `granule`.
/// `granule` must be a power of two.
#[inline]
pub const fn align_down(value: usize, granule: usize) -> usize {
    debug_assert!(granule.is_power_of_two());
    value & !(granule - 1)
}

/// True when `value` is a multiple of `granule`.
/// `granule` must be a power of two.
#[inline]
pub const fn is_aligned(value: usize, granule: usize) -> bool {
    debug_assert!(granule.is_power_of_two());
    value & (granule - 1) == 0
}
