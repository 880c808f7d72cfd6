use rand::Rng;
use thiserror::Error;

use crate::Coord;
use crate::cell::Cell;

/// Index of a [`Cell`] in the grid's arena.
pub type CellId = usize;

/// The 8 compass offsets around a cell.
const DIRECTIONS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1), // above
    (-1, 0),
    (1, 0), // sides
    (-1, 1),
    (0, 1),
    (1, 1), // below
];

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Board dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: Coord, height: Coord },

    #[error("Location ({x}, {y}) is already occupied")]
    LocationOccupied { x: Coord, y: Coord },
}

/// A fixed-size, edge-bounded board of cells.
///
/// # Representation
///
/// All cells live in one flat, row-major arena. Adjacency is a second flat
/// buffer of arena indices plus a per-cell span table, computed once at
/// construction; the topology never changes afterwards. Border and corner
/// cells simply have shorter spans, there is no wraparound.
pub struct Grid {
    width: Coord,
    height: Coord,

    /// This is where all of our memory goes
    cells: Vec<Cell>,

    /// Arena indices of every cell's in-bounds neighbours, cell by cell
    neighbour_ids: Vec<CellId>,

    /// `neighbour_spans[id]..neighbour_spans[id + 1]` indexes the slice of
    /// `neighbour_ids` belonging to cell `id`
    neighbour_spans: Vec<u32>,
}

impl Grid {
    /// Create a board where `seed_fn(x, y)` decides each cell's initial
    /// state. The seed function is called exactly once per coordinate, in
    /// unspecified order.
    pub fn new<F>(width: Coord, height: Coord, mut seed_fn: F) -> Result<Self, GridError>
    where
        F: FnMut(Coord, Coord) -> bool,
    {
        if width <= 0 || height <= 0 {
            return Err(GridError::ZeroDimension { width, height });
        }

        let n = width as usize * height as usize;
        let mut grid = Self {
            width,
            height,
            cells: Vec::with_capacity(n),
            neighbour_ids: Vec::with_capacity(n * 8),
            neighbour_spans: Vec::with_capacity(n + 1),
        };

        grid.populate_cells(&mut seed_fn)?;
        grid.prepopulate_neighbours();

        Ok(grid)
    }

    /// Create a board where each cell starts alive with the given
    /// probability, drawn from the caller's generator. A fixed-seed
    /// generator reproduces the same board every run.
    pub fn random<R>(
        width: Coord,
        height: Coord,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        Self::new(width, height, |_x, _y| rng.r#gen::<f64>() < probability)
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    /// Number of cells on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look up the cell at `(x, y)`, or `None` when out of bounds.
    pub fn cell_at(&self, x: Coord, y: Coord) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    /// The precomputed, bounds-clipped neighbours of `(x, y)`: between 1 and
    /// 8 entries for an in-bounds coordinate, empty otherwise. Stable across
    /// ticks.
    pub fn neighbours_of(&self, x: Coord, y: Coord) -> &[CellId] {
        if self.in_bounds(x, y) {
            self.neighbours(self.index_of(x, y))
        } else {
            &[]
        }
    }

    /// Count how many of `id`'s neighbours are currently alive.
    pub fn alive_neighbours(&self, id: CellId) -> u8 {
        let mut alive = 0;
        for &n in self.neighbours(id) {
            if self.cells[n].alive {
                alive += 1;
            }
        }
        alive
    }

    /// Apply `f` to every cell. Iteration order is unspecified.
    pub fn for_each_cell<F>(&self, mut f: F)
    where
        F: FnMut(&Cell),
    {
        for cell in &self.cells {
            f(cell);
        }
    }

    /// The cells of row `y`, left to right.
    pub fn row(&self, y: Coord) -> &[Cell] {
        let start = self.index_of(0, y);
        &self.cells[start..start + self.width as usize]
    }

    pub(crate) fn neighbours(&self, id: CellId) -> &[CellId] {
        let lo = self.neighbour_spans[id] as usize;
        let hi = self.neighbour_spans[id + 1] as usize;

        &self.neighbour_ids[lo..hi]
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn populate_cells<F>(&mut self, seed_fn: &mut F) -> Result<(), GridError>
    where
        F: FnMut(Coord, Coord) -> bool,
    {
        for y in 0..self.height {
            for x in 0..self.width {
                self.add_cell(x, y, seed_fn(x, y))?;
            }
        }

        Ok(())
    }

    fn add_cell(&mut self, x: Coord, y: Coord, alive: bool) -> Result<CellId, GridError> {
        let id = self.index_of(x, y);

        // Population walks the coordinate space exactly once, so the slot
        // for (x, y) must be the next free one.
        if id != self.cells.len() {
            return Err(GridError::LocationOccupied { x, y });
        }

        self.cells.push(Cell::new(x, y, alive));

        Ok(id)
    }

    /// Resolve the arena index of each cell's in-bounds neighbours.
    /// Off-board offsets are dropped here, never reported as errors.
    fn prepopulate_neighbours(&mut self) {
        self.neighbour_spans.push(0);

        for id in 0..self.cells.len() {
            let Cell { x, y, .. } = self.cells[id];

            for (dx, dy) in DIRECTIONS {
                let (nx, ny) = (x + dx, y + dy);

                if self.in_bounds(nx, ny) {
                    self.neighbour_ids.push(self.index_of(nx, ny));
                }
            }

            self.neighbour_spans.push(self.neighbour_ids.len() as u32);
        }
    }

    fn in_bounds(&self, x: Coord, y: Coord) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index_of(&self, x: Coord, y: Coord) -> CellId {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod test {
    use super::Grid;
    use super::GridError;

    fn dead_grid(width: i32, height: i32) -> Grid {
        Grid::new(width, height, |_, _| false).unwrap()
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(0, 10, |_, _| false),
            Err(GridError::ZeroDimension { .. })
        ));
        assert!(matches!(
            Grid::new(10, 0, |_, _| false),
            Err(GridError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn every_coordinate_holds_one_cell() {
        let grid = dead_grid(5, 4);

        assert_eq!(grid.len(), 20);

        for y in 0..4 {
            for x in 0..5 {
                let cell = grid.cell_at(x, y).unwrap();
                assert_eq!((cell.x, cell.y), (x, y));
            }
        }
    }

    #[test]
    fn out_of_bounds_lookup_is_none() {
        let grid = dead_grid(5, 4);

        assert!(grid.cell_at(-1, 0).is_none());
        assert!(grid.cell_at(0, -1).is_none());
        assert!(grid.cell_at(5, 0).is_none());
        assert!(grid.cell_at(0, 4).is_none());
    }

    #[test]
    fn neighbours_are_clipped_at_the_edges() {
        let grid = dead_grid(4, 4);

        // corners get 3, edges 5, interior cells all 8
        assert_eq!(grid.neighbours_of(0, 0).len(), 3);
        assert_eq!(grid.neighbours_of(3, 3).len(), 3);
        assert_eq!(grid.neighbours_of(1, 0).len(), 5);
        assert_eq!(grid.neighbours_of(0, 2).len(), 5);
        assert_eq!(grid.neighbours_of(1, 1).len(), 8);
        assert_eq!(grid.neighbours_of(2, 2).len(), 8);
    }

    #[test]
    fn neighbours_of_out_of_bounds_is_empty() {
        let grid = dead_grid(4, 4);

        assert!(grid.neighbours_of(-1, -1).is_empty());
        assert!(grid.neighbours_of(4, 0).is_empty());
    }

    #[test]
    fn alive_neighbours_counts_only_in_grid_cells() {
        let grid = Grid::new(3, 3, |_, _| true).unwrap();

        // all 9 cells alive, so the count equals the clipped neighbour count
        let corner = grid.neighbours_of(0, 0).len();
        assert_eq!(grid.alive_neighbours(0), corner as u8);
        assert_eq!(grid.alive_neighbours(4), 8);
    }

    #[test]
    fn seed_fn_decides_initial_state() {
        let grid = Grid::new(3, 3, |x, y| x == y).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(grid.cell_at(x, y).unwrap().alive, x == y);
            }
        }
    }
}
