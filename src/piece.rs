use serde::{Deserialize, Serialize};

/// The two sides of the game. Black sits at rows 0–2 and advances toward
/// row 7; Red sits at rows 5–7 and advances toward row 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum Side {
    Black,
    Red,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Black => Side::Red,
            Side::Red => Side::Black,
        }
    }

    /// Row direction this side's men move in.
    pub fn forward(&self) -> i32 {
        match self {
            Side::Black => 1,
            Side::Red => -1,
        }
    }

    /// The row where this side's men are crowned.
    pub fn far_row(&self) -> i32 {
        match self {
            Side::Black => 7,
            Side::Red => 0,
        }
    }
}

/// What a board square holds. `Unplayable` marks the light squares (column
/// parity equal to row parity); it is set at construction and never changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum CellValue {
    Empty,
    BlackMan,
    RedMan,
    Unplayable,
    BlackKing,
    RedKing,
}

impl CellValue {
    pub fn man_of(side: Side) -> CellValue {
        match side {
            Side::Black => CellValue::BlackMan,
            Side::Red => CellValue::RedMan,
        }
    }

    pub fn king_of(side: Side) -> CellValue {
        match side {
            Side::Black => CellValue::BlackKing,
            Side::Red => CellValue::RedKing,
        }
    }

    /// The side whose piece occupies this cell, if any.
    pub fn owner(&self) -> Option<Side> {
        match self {
            CellValue::BlackMan | CellValue::BlackKing => Some(Side::Black),
            CellValue::RedMan | CellValue::RedKing => Some(Side::Red),
            CellValue::Empty | CellValue::Unplayable => None,
        }
    }

    pub fn is_man(&self) -> bool {
        matches!(self, CellValue::BlackMan | CellValue::RedMan)
    }

    pub fn is_king(&self) -> bool {
        matches!(self, CellValue::BlackKing | CellValue::RedKing)
    }
}
