use derive_new::new;
use serde::Serialize;

/// Board dimensions as `(rows, columns)`.
pub type Dimensions = (usize, usize);

/// Offsets in the order neighbours are visited: row offset outer, column offset inner.
/// Searches depend on this order to pick the same path every time.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// A cell on the board. The top left corner is `Position { row: 0, col: 0 }`.
#[derive(new, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn from_index(index: usize, columns: usize) -> Position {
        Position::new(index / columns, index % columns)
    }

    /// Row-major index, the addressing used at the engine boundary.
    pub fn to_index(self, columns: usize) -> usize {
        self.row * columns + self.col
    }

    fn offset_by(self, (dr, dc): (isize, isize)) -> Position {
        Position::new(self.row.wrapping_add_signed(dr), self.col.wrapping_add_signed(dc))
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

/// Up to eight in-bounds neighbours of `pos`, in [`NEIGHBOR_OFFSETS`] order.
pub fn neighbors(dims: Dimensions, pos: Position) -> impl Iterator<Item = Position> {
    let (rows, columns) = dims;
    NEIGHBOR_OFFSETS
        .iter()
        // off-board offsets wrap to huge values and fail the bounds check
        .map(move |&offset| pos.offset_by(offset))
        .filter(move |p| p.row < rows && p.col < columns)
}
