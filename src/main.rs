//! gridfall runner.
//!
//! Wires the simulation into the host frame loop with a crossterm-backed
//! renderer, then restores the terminal on the way out.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use gridfall::core::Simulation;
use gridfall::host;
use gridfall::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sim = Simulation::new(clock_seed());
    let view = GameView::default();
    host::run_loop(term, &view, &mut sim)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
