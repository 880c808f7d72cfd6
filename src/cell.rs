use crate::Coord;

/// A single cell of the board.
///
/// Cells never move and are never dropped before the process ends. Adjacency
/// between cells lives in [`Grid`](crate::grid::Grid) as arena indices, not
/// here, so a `Cell` stays `Copy` and the arena stays a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,

    /// Current state, valid between ticks.
    pub alive: bool,

    /// Staged state for the next generation. Only meaningful during a tick,
    /// between the decide and commit passes.
    pub next_state: bool,
}

impl Cell {
    pub fn new(x: Coord, y: Coord, alive: bool) -> Self {
        Self {
            x,
            y,
            alive,
            next_state: alive,
        }
    }

    /// The character this cell renders as.
    pub fn to_char(&self) -> char {
        if self.alive { 'o' } else { ' ' }
    }
}
