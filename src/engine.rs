use tracing::trace;

use crate::Tick;
use crate::grid::Grid;

/// Advances a [`Grid`] one generation at a time, applying the standard
/// B3/S23 Life rule with no wraparound.
///
/// Each tick runs in two passes over the arena. The decide pass reads only
/// `alive` fields and stages every cell's next state; the commit pass then
/// publishes the staged states. No cell's decision can observe a neighbour's
/// already-committed next-generation value within the same tick.
pub struct Engine {
    grid: Grid,
    tick: Tick,
}

impl Engine {
    pub fn new(grid: Grid) -> Self {
        Self { grid, tick: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced so far.
    pub fn tick_count(&self) -> Tick {
        self.tick
    }

    /// Advance the board by exactly one generation.
    ///
    /// This is a pure, total transformation of the board state: given a
    /// validly constructed grid it cannot fail, and the same input state
    /// always yields the same output state.
    pub fn tick(&mut self) {
        // Decide: stage next states without touching `alive`.
        for id in 0..self.grid.len() {
            let alive = self.grid.cells()[id].alive;
            let alive_neighbours = self.grid.alive_neighbours(id);

            let next = if alive {
                alive_neighbours == 2 || alive_neighbours == 3
            } else {
                alive_neighbours == 3
            };

            self.grid.cells_mut()[id].next_state = next;
        }

        // Commit: publish every staged state.
        for cell in self.grid.cells_mut() {
            cell.alive = cell.next_state;
        }

        self.tick += 1;

        trace!(tick = self.tick, "generation advanced");
    }
}
