//! Host frame loop and the callback seam between engine and game
//!
//! The game is reachable from exactly two callback slots plus a board read:
//! `on_input` delivers translated intents, `on_tick` advances the step
//! timer, and `board` exposes the color-per-cell view the renderer draws.
//! No engine base type is involved; the loop only sees `GameHooks`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::{Board, Simulation};
use crate::input::{should_quit, translate};
use crate::term::{GameView, TerminalRenderer, Viewport};
use crate::types::{MoveIntent, FRAME_MS};

/// The capability set the frame loop drives.
pub trait GameHooks {
    /// Deliver one translated input intent.
    fn on_input(&mut self, intent: MoveIntent);
    /// Advance timers by `elapsed_ms`; returns true when a tick ran.
    fn on_tick(&mut self, elapsed_ms: u32) -> bool;
    /// Current color for every cell, read after each tick.
    fn board(&self) -> &Board;
}

impl GameHooks for Simulation {
    fn on_input(&mut self, intent: MoveIntent) {
        self.set_intent(intent);
    }

    fn on_tick(&mut self, elapsed_ms: u32) -> bool {
        self.update(elapsed_ms)
    }

    fn board(&self) -> &Board {
        Simulation::board(self)
    }
}

/// Drive the game until a quit key arrives.
///
/// Input is delivered synchronously between frames, so the intent producer
/// and the tick consumer never run concurrently; no locking is needed.
pub fn run_loop(
    term: &mut TerminalRenderer,
    view: &GameView,
    hooks: &mut dyn GameHooks,
) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(hooks.board(), Viewport::new(w, h));
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    hooks.on_input(translate(key.code));
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Frame boundary: report elapsed time, redraw if a tick ran.
        if last_frame.elapsed() >= frame_duration {
            let elapsed = last_frame.elapsed().as_millis() as u32;
            last_frame = Instant::now();
            if hooks.on_tick(elapsed) {
                dirty = true;
            }
        }
    }
}
