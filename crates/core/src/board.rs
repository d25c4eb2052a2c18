//! Board module - the 12x20 well
//!
//! Flat cell array for cache locality and zero allocation. Coordinates are
//! (x, y) with x growing right and y growing down; (0, 0) is the top-left
//! of the well. Cells remember only the color they were locked with.

use arrayvec::ArrayVec;

use blockfall_types::{BlockColor, Cell, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::Shape;

/// Total number of cells in the well.
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Row indices cleared by one sweep, in clearance order. A full well clears
/// every row, so the list is bounded by the well height.
pub type SweptRows = ArrayVec<usize, BOARD_HEIGHT>;

/// The well - 12 columns by 20 rows in flat row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major (`y * WIDTH + x`).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty well.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for (x, y), or `None` outside the well.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Cell at (x, y); `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write the cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the shape placed at (x, y) overlaps a wall, the floor or the
    /// stack. Pure: same inputs, same answer, board untouched.
    ///
    /// The bounds are asymmetric on purpose: side walls and the floor are
    /// hard everywhere, but rows above the top are open sky - a tall matrix
    /// may poke above the well while it rotates in, and only the cells
    /// inside the well are tested against the stack.
    pub fn collides(&self, shape: Shape, x: i8, y: i8) -> bool {
        for (cx, cy) in shape.cells() {
            let bx = x + cx as i8;
            let by = y + cy as i8;
            if bx < 0 || bx >= BOARD_WIDTH as i8 {
                return true;
            }
            if by >= BOARD_HEIGHT as i8 {
                return true;
            }
            if by < 0 {
                continue;
            }
            if self.cells[(by as usize) * BOARD_WIDTH + (bx as usize)].is_some() {
                return true;
            }
        }
        false
    }

    /// Write every filled cell of the shape into the well at (x, y),
    /// overwriting unconditionally. Callers have already validated the
    /// placement; cells falling outside the well are skipped, not wrapped.
    pub fn lock(&mut self, shape: Shape, x: i8, y: i8, color: BlockColor) {
        for (cx, cy) in shape.cells() {
            self.set(x + cx as i8, y + cy as i8, Some(color));
        }
    }

    /// Whether row y is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT {
            return false;
        }
        let start = y * BOARD_WIDTH;
        self.cells[start..start + BOARD_WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove row y: rows above shift down one, an empty row appears at the
    /// top. Row width is untouched by construction.
    fn remove_row(&mut self, y: usize) {
        for row in (1..=y).rev() {
            let src = (row - 1) * BOARD_WIDTH;
            let dst = row * BOARD_WIDTH;
            self.cells.copy_within(src..src + BOARD_WIDTH, dst);
        }
        for cell in &mut self.cells[..BOARD_WIDTH] {
            *cell = None;
        }
    }

    /// Clear every full row, bottom-up, and return the indices cleared.
    ///
    /// After a removal the same index is checked again, because the row that
    /// shifted down into it may be full too - so stacked clears report the
    /// same landing index more than once, which is exactly where the clear
    /// cue belongs on screen. A board with no full rows returns an empty
    /// list and is left untouched.
    pub fn sweep(&mut self) -> SweptRows {
        let mut cleared = SweptRows::new();
        let mut y = BOARD_HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared.push(row);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Reference to the flat cell array.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the entire well.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Fill a whole row with one color, for test setups.
    #[cfg(test)]
    pub fn fill_row(&mut self, y: usize, color: BlockColor) {
        let start = y * BOARD_WIDTH;
        for cell in &mut self.cells[start..start + BOARD_WIDTH] {
            *cell = Some(color);
        }
    }

    /// Occupancy of row y as booleans, for test assertions.
    #[cfg(test)]
    pub fn row_occupancy(&self, y: usize) -> Vec<bool> {
        let start = y * BOARD_WIDTH;
        self.cells[start..start + BOARD_WIDTH]
            .iter()
            .map(|cell| cell.is_some())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
