use std::iter::FusedIterator;

use crate::tetris::prelude::*;

/// The heights produced by [`Board::play_sequence`], one per move.
///
/// Each call to `next` plays one move on the borrowed board. Once a move fails the iterator
/// yields nothing more.
pub struct Heights<'b, 'a, I> {
    board: &'b mut Board<'a>,
    moves: I,
    halted: bool,
}

impl<'b, 'a, I> Heights<'b, 'a, I> {
    pub(super) fn new(board: &'b mut Board<'a>, moves: I) -> Heights<'b, 'a, I> {
        Heights { board, moves, halted: false }
    }

    /// The board as it stands after the most recent move.
    pub fn board(&self) -> &Board<'a> {
        self.board
    }
}

impl<'b, 'a, I> Iterator for Heights<'b, 'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let Some(mv) = self.moves.next() else {
            self.halted = true;
            return None;
        };
        match self.board.play_move(mv.as_ref()) {
            Ok(()) => Some(Ok(self.board.get_height())),
            Err(e) => {
                self.halted = true;
                Some(Err(e.context(format!("sequence halted at move {:?}", mv.as_ref()))))
            }
        }
    }
}

impl<'b, 'a, I> FusedIterator for Heights<'b, 'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{}
