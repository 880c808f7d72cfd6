use crate::grid::Grid;

/// Reusable text framebuffer for the board.
///
/// A frame is one line per row, top to bottom: one character per cell
/// (`'o'` alive, `' '` dead), then a newline. The whole frame is
/// `(width + 1) * height` bytes, so the buffer is sized once up front and
/// reused every generation rather than rebuilt through repeated
/// concatenation.
pub struct Frame {
    fb: String,
}

impl Frame {
    /// Create a framebuffer sized for the given board.
    pub fn new(grid: &Grid) -> Self {
        let (w, h) = (grid.width() as usize, grid.height() as usize);

        Self {
            fb: String::with_capacity((w + 1) * h),
        }
    }

    /// Draw the board into the framebuffer. Reads the grid only; never
    /// mutates it.
    pub fn render(&mut self, grid: &Grid) -> &str {
        self.fb.clear();

        for y in 0..grid.height() {
            for cell in grid.row(y) {
                self.fb.push(cell.to_char());
            }

            self.fb.push('\n');
        }

        &self.fb
    }
}

#[cfg(test)]
mod test {
    use super::Frame;
    use crate::grid::Grid;

    #[test]
    fn frame_size_is_deterministic() {
        let grid = Grid::new(7, 3, |_, _| false).unwrap();
        let mut frame = Frame::new(&grid);

        assert_eq!(frame.render(&grid).len(), (7 + 1) * 3);
    }

    #[test]
    fn buffer_is_reused_across_frames() {
        let grid = Grid::new(150, 40, |x, y| (x + y) % 3 == 0).unwrap();
        let mut frame = Frame::new(&grid);

        frame.render(&grid);
        let cap = frame.fb.capacity();

        for _ in 0..10 {
            frame.render(&grid);
        }

        assert_eq!(frame.fb.capacity(), cap);
    }

    #[test]
    fn rows_render_top_to_bottom() {
        let grid = Grid::new(3, 2, |_, y| y == 0).unwrap();
        let mut frame = Frame::new(&grid);

        assert_eq!(frame.render(&grid), "ooo\n   \n");
    }
}
