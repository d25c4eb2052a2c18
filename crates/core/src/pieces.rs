//! Piece catalog - shape matrices and rotation
//!
//! Every piece is an N x N binary matrix (N = 2, 3 or 4). The catalog holds
//! the spawn orientation per kind and is never mutated: rotation is a pure
//! function returning a fresh matrix. Rotation is transpose-then-mirror;
//! wall kicks are the session's job, sliding candidates along
//! `blockfall_types::KICK_OFFSETS`.

use blockfall_types::{PieceKind, BOARD_WIDTH};

/// An N x N piece matrix stored in a fixed 4x4 grid.
///
/// Cell (x, y) is column x of row y; nonzero means filled. Shapes are `Copy`
/// and every transform returns a new value, so catalog data can never be
/// aliased into a live piece and bent by a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    grid: [[u8; 4]; 4],
}

impl Shape {
    const fn from_rows(size: u8, grid: [[u8; 4]; 4]) -> Self {
        Self { size, grid }
    }

    /// Matrix edge length: 2 for O, 4 for I, 3 for the rest.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether cell (x, y) is filled. Coordinates outside the 4x4 grid read
    /// empty, so callers may probe a full preview box without bounds math.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < 4 && y < 4 && self.grid[y][x] != 0
    }

    /// Iterate the filled cells as (x, y) pairs, row-major.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.size as usize;
        (0..n)
            .flat_map(move |y| (0..n).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.grid[y][x] != 0)
    }

    /// Rotate 90 degrees, returning the new matrix.
    ///
    /// Transpose the N x N region, then mirror: each row reversed for
    /// clockwise, the row order reversed for counter-clockwise. Clockwise
    /// followed by counter-clockwise restores the original exactly.
    pub fn rotated(self, clockwise: bool) -> Shape {
        let n = self.size as usize;
        let mut grid = [[0u8; 4]; 4];
        for y in 0..n {
            for x in 0..n {
                grid[x][y] = self.grid[y][x];
            }
        }
        if clockwise {
            for row in grid.iter_mut().take(n) {
                row[..n].reverse();
            }
        } else {
            grid[..n].reverse();
        }
        Shape {
            size: self.size,
            grid,
        }
    }

    /// Spawn column for this matrix: centered on the well, `W/2 - N/2`.
    pub fn spawn_x(&self) -> i8 {
        (BOARD_WIDTH / 2) as i8 - (self.size / 2) as i8
    }
}

/// The canonical spawn-orientation matrix for a kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::from_rows(
            3,
            [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::O => Shape::from_rows(
            2,
            [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::L => Shape::from_rows(
            3,
            [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::J => Shape::from_rows(
            3,
            [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::S => Shape::from_rows(
            3,
            [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::Z => Shape::from_rows(
            3,
            [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        PieceKind::I => Shape::from_rows(
            4,
            [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
    }
}
