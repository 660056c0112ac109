// File: crates/demo/src/main.rs
// Summary: One-shot generator printing byte-axis tick positions as `usize` literals.

use std::io;

use anyhow::{Context, Result};
use tick_core::{write_literals, TickPlan};

fn main() -> Result<()> {
    // Stdout carries exactly the literal stream, nothing else; the span and
    // point constants live in tick_core::plan.
    let plan = TickPlan::default();
    let ticks = plan.ticks().context("tick plan rejected")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_literals(&mut out, ticks).context("writing tick literals")?;
    Ok(())
}
