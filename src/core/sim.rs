//! Simulation - the fixed-timestep tick state machine
//!
//! `update` is called once per rendered frame and gates the tick body behind
//! an elapsed-time accumulator: the body runs only when a full step interval
//! (250 ms) has passed, so the simulation speed is independent of frame rate
//! and extra calls are harmless no-ops.
//!
//! Tick body, in order: clear the board overlay, apply the buffered intent
//! and descend, either lock down (anchor crossed the floor threshold) or
//! project the piece, re-stamp settled content, reset the intent slot.

use crate::core::board::Board;
use crate::core::piece::FallingPiece;
use crate::core::settled::{SettledCell, SettledStore};
use crate::core::shapes::ShapePicker;
use crate::types::{in_bounds, MoveIntent, LOCK_Y, STEP_MS};

/// The grid/piece simulation: board view, settled store, falling piece,
/// buffered input intent, and the step timer.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    settled: SettledStore,
    falling: FallingPiece,
    intent: MoveIntent,
    picker: ShapePicker,
    step_timer_ms: u32,
    /// Ticks executed so far (diagnostics and tests)
    steps: u64,
}

impl Simulation {
    /// Create a simulation with a seeded shape picker and a fresh spawn.
    pub fn new(seed: u32) -> Self {
        let mut picker = ShapePicker::new(seed);
        let falling = FallingPiece::spawn(picker.draw());
        Self {
            board: Board::new(),
            settled: SettledStore::new(),
            falling,
            intent: MoveIntent::Neutral,
            picker,
            step_timer_ms: 0,
            steps: 0,
        }
    }

    /// Create a simulation with an explicit initial piece (tests, demos).
    pub fn with_falling(seed: u32, falling: FallingPiece) -> Self {
        let mut sim = Self::new(seed);
        sim.falling = falling;
        sim
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settled(&self) -> &SettledStore {
        &self.settled
    }

    pub fn falling(&self) -> &FallingPiece {
        &self.falling
    }

    /// Replace the falling piece (tests and demos set up exact positions).
    pub fn set_falling(&mut self, falling: FallingPiece) {
        self.falling = falling;
    }

    pub fn pending_intent(&self) -> MoveIntent {
        self.intent
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Buffer a directional intent for the next tick.
    ///
    /// Last-writer-wins: a later intent (including `Neutral`, which is what
    /// unrecognized input translates to) overwrites an earlier one. At most
    /// one intent is honored per tick.
    pub fn set_intent(&mut self, intent: MoveIntent) {
        self.intent = intent;
    }

    /// Advance the step timer; run the tick body if a full step has elapsed.
    ///
    /// Returns true when a tick ran. At most one tick runs per call; the
    /// accumulator resets to zero on a tick rather than carrying a
    /// remainder, matching the reference cadence.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        self.step_timer_ms = self.step_timer_ms.saturating_add(elapsed_ms);
        if self.step_timer_ms < STEP_MS {
            return false;
        }
        self.step_timer_ms = 0;
        self.step();
        true
    }

    /// Run one tick body unconditionally. Tests and benches call this
    /// directly to skip the timing gate.
    pub fn step(&mut self) {
        self.steps += 1;

        // 1. Clear the overlay; settled content lives in the store and is
        //    re-stamped below.
        self.board.clear();

        // 2. Apply buffered intent, then descend.
        match self.intent {
            MoveIntent::Left => self.falling.move_left(),
            MoveIntent::Right => self.falling.move_right(),
            MoveIntent::Neutral => {}
        }
        self.falling.descend();

        // 3/4/5. Lock down at the floor threshold (no projection that
        // tick), otherwise project the piece onto the board.
        if self.falling.y() >= LOCK_Y {
            self.lock_down();
        } else {
            let color = self.falling.color();
            for (x, y) in self.falling.cells() {
                // Out-of-range cells are dropped by the board.
                self.board.set(x, y, Some(color));
            }
        }

        // 6. Settled content is stamped last so it is never hidden by the
        //    falling piece.
        self.settled.stamp(&mut self.board);

        // 7. Consume the intent slot.
        self.intent = MoveIntent::Neutral;
    }

    /// Commit the falling piece's in-bounds cells to the settled store and
    /// replace it with a fresh spawn.
    fn lock_down(&mut self) {
        let color = self.falling.color();
        for (x, y) in self.falling.cells() {
            if in_bounds(x, y) {
                self.settled.push(SettledCell { x, y, color });
            }
        }
        self.falling = FallingPiece::spawn(self.picker.draw());
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::PieceShape;
    use crate::types::{TileColor, SPAWN_X, SPAWN_Y};

    fn square_piece(x: i8, y: i8) -> FallingPiece {
        let shape =
            PieceShape::from_cells(&[(0, 0), (1, 0), (0, 1), (1, 1)], TileColor::Red);
        FallingPiece::at(shape, x, y)
    }

    #[test]
    fn test_update_gates_on_step_interval() {
        let mut sim = Simulation::new(1);

        assert!(!sim.update(100));
        assert!(!sim.update(100));
        assert_eq!(sim.steps(), 0);

        // Crosses 250 ms: exactly one tick.
        assert!(sim.update(100));
        assert_eq!(sim.steps(), 1);

        // Accumulator was reset.
        assert!(!sim.update(249));
        assert!(sim.update(1));
        assert_eq!(sim.steps(), 2);
    }

    #[test]
    fn test_step_descends_and_projects() {
        let mut sim = Simulation::with_falling(1, square_piece(5, 4));
        sim.step();

        assert_eq!(sim.falling().y(), 5);
        for (x, y) in [(4, 1), (5, 1), (4, 2), (5, 2)] {
            assert_eq!(sim.board().get(x, y), Some(Some(TileColor::Red)));
        }
        assert_eq!(sim.board().occupied_count(), 4);
    }

    #[test]
    fn test_intent_is_consumed_each_tick() {
        let mut sim = Simulation::with_falling(1, square_piece(5, 4));
        sim.set_intent(MoveIntent::Left);
        sim.step();
        assert_eq!(sim.falling().x(), 4);
        assert_eq!(sim.pending_intent(), MoveIntent::Neutral);

        // No new intent: x holds.
        sim.step();
        assert_eq!(sim.falling().x(), 4);
    }

    #[test]
    fn test_lock_down_respawns_at_spawn_anchor() {
        let mut sim = Simulation::with_falling(1, square_piece(5, 20));
        sim.step();

        assert_eq!(sim.settled().len(), 4);
        let fresh = sim.falling();
        assert_eq!((fresh.x(), fresh.y()), (SPAWN_X, SPAWN_Y));
    }
}
