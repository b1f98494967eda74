use super::player::Player;

pub const ROWS: usize = 5;
pub const COLS: usize = 7;

/// Number of same-coloured pieces in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Line orientations as (row step, column step): horizontal, vertical,
/// `\` diagonal and `/` diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Landing position of a placed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("column {column} is outside the board")]
    InvalidColumn { column: isize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position, `None` when off the board.
    /// Row 0 is the top, row 4 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Row-major view of the grid for display.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, left to right.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of non-empty cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// True when no column has an empty cell below a piece.
    pub fn is_settled(&self) -> bool {
        (0..COLS).all(|col| {
            let mut seen_piece = false;
            (0..ROWS).all(|row| {
                let occupied = self.cells[row][col] != Cell::Empty;
                if seen_piece && !occupied {
                    return false;
                }
                seen_piece |= occupied;
                true
            })
        })
    }

    /// Drop `player`'s piece into `column`. The piece rests on the lowest
    /// empty cell. On error the board is left untouched.
    pub fn place(&mut self, column: isize, player: Player) -> Result<Coordinate, PlacementError> {
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < COLS)
            .ok_or(PlacementError::InvalidColumn { column })?;

        if self.is_column_full(col) {
            return Err(PlacementError::ColumnFull { column: col });
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(PlacementError::ColumnFull { column: col })?;

        self.cells[row][col] = player.to_cell();
        Ok(Coordinate { row, column: col })
    }

    /// Check whether the piece at (row, col) completes a line of four for
    /// `player`. Every window of four cells containing the anchor is tested
    /// in all four orientations. Returns false when the anchor does not hold
    /// `player`'s piece.
    pub fn has_won(&self, row: usize, col: usize, player: Player) -> bool {
        let cell = player.to_cell();
        if self.get(row, col) != Some(cell) {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.window_through(row, col, dr, dc, cell))
    }

    /// Slide a window of `WIN_LENGTH` cells along (dr, dc) so that each
    /// position of the window covers the anchor once.
    fn window_through(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (0..WIN_LENGTH as isize).any(|offset| {
            let start_row = row as isize - offset * dr;
            let start_col = col as isize - offset * dc;
            (0..WIN_LENGTH as isize).all(|step| {
                self.cell_at(start_row + step * dr, start_col + step * dc) == Some(cell)
            })
        })
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(row, col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
