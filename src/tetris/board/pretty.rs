use itertools::Itertools;

use crate::tetris::prelude::*;

impl<'a> Board<'a> {
    /// Pretty-prints the live terrain, top row first, down to row 0.
    pub fn pretty(&self) -> String {
        self.rows[..=self.max_profile()].iter().rev().map(|row| {
            format!("{}", row)
        }).join("\n")
    }
}
