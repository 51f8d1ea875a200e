/// Occupancy state of one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// What a caller sees when asking about a coordinate. `OutOfBounds` is
/// a normal answer, not an error: rays and movement both branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Wall,
    OutOfBounds,
}

/// Static 2D occupancy grid. One cell = one world unit square, origin
/// at (0,0). Immutable after construction.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Parses a text map: one line per row (constant y), characters
    /// along x. Space is empty, anything else is a wall. Ragged rows
    /// are padded with wall, and the outer border is forced solid so
    /// the movement controller needs no separate bounds check.
    pub fn parse(text: &str) -> Grid {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|c| if c == ' ' { Cell::Empty } else { Cell::Wall })
                .collect();
            rows.push(row);
        }

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for row in &mut rows {
            row.resize(width, Cell::Wall);
            cells.extend_from_slice(row);
        }

        let mut grid = Grid { width, height, cells };
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    grid.cells[y * width + x] = Cell::Wall;
                }
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// State of the cell containing integer coordinate (x, y).
    pub fn cell_state(&self, x: i32, y: i32) -> CellState {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return CellState::OutOfBounds;
        }
        match self.cell(x as usize, y as usize) {
            Cell::Empty => CellState::Empty,
            Cell::Wall => CellState::Wall,
        }
    }

    /// Convenience for world-space (float) positions.
    pub fn cell_state_at(&self, wx: f32, wy: f32) -> CellState {
        self.cell_state(wx.floor() as i32, wy.floor() as i32)
    }

    fn cell(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }
}
