use serde::{Deserialize, Serialize};

use crate::piece::{CellValue, Side};

/// The 8×8 grid. Cells are indexed by (column, row) positions; squares whose
/// column parity equals their row parity are permanently `Unplayable`.
///
/// The board is pure data: all legality checking and mutation policy lives in
/// the rules module. Move sources read it through the query methods and only
/// ever write through `rules::perform_move`.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Board {
    cells: [[CellValue; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with every playable square empty. Useful for setting up test
    /// positions.
    pub fn empty() -> Self {
        let mut cells = [[CellValue::Unplayable; 8]; 8];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if x % 2 != y % 2 {
                    *cell = CellValue::Empty;
                }
            }
        }
        Board { cells }
    }

    /// The starting position: Black men on the playable squares of rows 0–2,
    /// Red men on rows 5–7, rows 3–4 empty.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for y in 0..8usize {
            for x in 0..8usize {
                if x % 2 != y % 2 {
                    board.cells[y][x] = if y < 3 {
                        CellValue::BlackMan
                    } else if y > 4 {
                        CellValue::RedMan
                    } else {
                        CellValue::Empty
                    };
                }
            }
        }
        board
    }

    fn in_bounds(pos: (i32, i32)) -> bool {
        (0..8).contains(&pos.0) && (0..8).contains(&pos.1)
    }

    /// The value at a position, or `None` for coordinates outside the board.
    /// Out-of-range is distinct from `Empty`; callers must not conflate them.
    pub fn value_at(&self, pos: (i32, i32)) -> Option<CellValue> {
        if Self::in_bounds(pos) {
            Some(self.cells[pos.1 as usize][pos.0 as usize])
        } else {
            None
        }
    }

    /// Unconditional write. Only the rules module calls this; out-of-range
    /// positions are ignored.
    pub fn set_value_at(&mut self, pos: (i32, i32), value: CellValue) {
        if Self::in_bounds(pos) {
            self.cells[pos.1 as usize][pos.0 as usize] = value;
        }
    }

    /// True iff the cell holds a man or king belonging to `side`.
    pub fn owns(&self, side: Side, pos: (i32, i32)) -> bool {
        self.value_at(pos).and_then(|v| v.owner()) == Some(side)
    }

    /// True iff the cell holds `side`'s king.
    pub fn is_king(&self, pos: (i32, i32), side: Side) -> bool {
        self.value_at(pos) == Some(CellValue::king_of(side))
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|v| v.owner() == Some(side))
            .count()
    }
}
