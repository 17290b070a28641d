use crate::tetris::prelude::*;

/// A block offset inside a shape's bounding box; `y` grows downward from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block {
    pub x: usize,
    pub y: usize,
}

impl Block {
    /// Constructs a new block offset.
    pub const fn new(x: usize, y: usize) -> Block {
        Block { x, y }
    }

    /// The depth this block reaches below the top of its shape.
    pub fn depth(&self) -> usize {
        self.y + 1
    }
}

/// A cell on the board in the current frame; `row` grows upward from row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    /// Constructs a new board cell.
    pub fn new(col: usize, row: usize) -> Cell {
        Cell { col, row }
    }

    /// Where a block lands when its shape sits with column `dx` leftmost and its top at row `dy`.
    pub fn landed(block: &Block, dx: usize, dy: usize) -> Cell {
        Cell {
            col: dx + block.x,
            row: dy - block.y,
        }
    }
}

// B - B

impl Sub<Block> for Block {
    type Output = Block;
    fn sub(self, rhs: Block) -> Self::Output {
        Block {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
