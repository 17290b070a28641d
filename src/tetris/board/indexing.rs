use crate::tetris::prelude::*;

impl<'a> Board<'a> {
    /// Whether the cell at a given column and row of the current frame is occupied.
    pub fn cell(&self, cell: &Cell) -> Result<bool> {
        if cell.col < self.width && cell.row < self.rows.len() {
            Ok(self.cell_unchecked(cell))
        } else {
            Err(anyhow!(
                "invalid cell (col {}, row {}) on a {}x{} board",
                cell.col,
                cell.row,
                self.width,
                self.rows.len()
            ))
        }
    }

    /// Unchecked cell lookup; engine use only.
    pub(super) fn cell_unchecked(&self, cell: &Cell) -> bool {
        self.rows[cell.row].occupied(cell.col)
    }
}
