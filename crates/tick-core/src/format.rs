// File: crates/tick-core/src/format.rs
// Summary: Streaming literal writer and human-readable byte labels.

use std::io::{self, Write};

/// Stream each tick as a `usize` literal with a trailing comma, then end the
/// line. Values are written as they are produced, never collected first.
pub fn write_literals(
    out: &mut impl Write,
    ticks: impl IntoIterator<Item = usize>,
) -> io::Result<()> {
    for tick in ticks {
        write!(out, "{}usize,", tick)?;
    }
    writeln!(out)
}

/// Binary-unit label for a byte count ("4 B", "1.00 KiB", "128.00 MiB").
pub fn byte_label(bytes: usize) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}
