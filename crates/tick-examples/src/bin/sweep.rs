// File: crates/tick-examples/src/bin/sweep.rs
// Summary: Minimal example that prints a planned cache-line sweep as a table.

use tick_core::{byte_label, Ticks};

/// Cache-line granule: sweep start, minimum step, and alignment width.
const CACHE_LINE: usize = 64;
/// Exclusive sweep ceiling.
const CEILING: usize = 32 * 1024 * 1024 * 1024;
/// Per-step growth once the one-line floor stops dominating.
const RATE: f64 = 1.01;

fn main() {
    println!("{:>6} {:>15} {:>12}", "tick", "bytes", "label");
    for (i, bytes) in Ticks::with_rate(CACHE_LINE, CEILING, RATE).enumerate() {
        println!("{:>6} {:>15} {:>12}", i, bytes, byte_label(bytes));
    }
}
