use crate::utils::prelude::*;

use super::errors::EngineError;

/// Columns on a board when the caller doesn't pick a width.
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Rows a fresh board starts out with.
pub const INITIAL_ROWS: usize = 100;

/// Rows appended whenever the board runs short of headroom.
pub const ROW_BATCH: usize = 50;

/// Every shape in the catalog is a tetromino.
pub const BLOCKS_PER_SHAPE: usize = 4;

pub const NUM_SHAPES: usize = 7;

// A shape typing.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Q = 0,
    Z = 1,
    S = 2,
    T = 3,
    I = 4,
    L = 5,
    J = 6,
}

impl ShapeKind {
    /// Gets the shape kinds in catalog order.
    pub fn all() -> [ShapeKind; NUM_SHAPES] {
        [ShapeKind::Q, ShapeKind::Z, ShapeKind::S, ShapeKind::T, ShapeKind::I, ShapeKind::L, ShapeKind::J]
    }

    /// Notates the shape as its upper-case letter.
    pub fn notate(&self) -> String {
        match self {
            ShapeKind::Q => "Q",
            ShapeKind::Z => "Z",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::I => "I",
            ShapeKind::L => "L",
            ShapeKind::J => "J"
        }.into()
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Q" | "q" => Ok(ShapeKind::Q),
            "Z" | "z" => Ok(ShapeKind::Z),
            "S" | "s" => Ok(ShapeKind::S),
            "T" | "t" => Ok(ShapeKind::T),
            "I" | "i" => Ok(ShapeKind::I),
            "L" | "l" => Ok(ShapeKind::L),
            "J" | "j" => Ok(ShapeKind::J),
            _         => Err(EngineError::UnknownShape { name: s.to_owned() }.into())
        }
    }
}

impl From<u8> for ShapeKind {
    fn from(value: u8) -> Self {
        match value {
            0 => ShapeKind::Q,
            1 => ShapeKind::Z,
            2 => ShapeKind::S,
            3 => ShapeKind::T,
            4 => ShapeKind::I,
            5 => ShapeKind::L,
            6 => ShapeKind::J,
            _ => panic!("expected ShapeKind of 0-6, received {value}"),
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}
