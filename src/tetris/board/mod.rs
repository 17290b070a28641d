pub(crate) mod indexing;
pub(crate) mod moves;
pub(crate) mod pretty;
pub(crate) mod sequence;


use super::prelude::*;

pub use sequence::Heights;

/// One row of terrain, a cell per column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row(Vec<bool>);

impl Row {
    /// An unoccupied row of the given width.
    pub fn empty(width: usize) -> Row {
        Row(vec![false; width])
    }

    /// Whether every cell in the row is occupied, i.e. the row should be cleared.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|&cell| cell)
    }

    /// Whether the cell in the given column is occupied.
    pub fn occupied(&self, col: usize) -> bool {
        self.0[col]
    }

    /// Occupies the cell in the given column.
    pub fn fill(&mut self, col: usize) {
        self.0[col] = true;
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &cell in &self.0 {
            write!(f, "{}", if cell { '#' } else { '.' })?;
        }
        Ok(())
    }
}

/// A board that keeps only the terrain a falling shape can still reach.
#[derive(Clone, Debug)]
pub struct Board<'a> {
    /// The number of columns.
    width: usize,

    /// Live terrain, bottom row first. Row 0 of a fresh board is the floor, so shapes always
    /// land on row 1 or above; after compaction row 0 holds the top of the lowest column.
    rows: Vec<Row>,

    /// The skyline: for each column, the row of its topmost occupied cell, or 0 if there is none.
    ///
    /// Since shapes cannot move sideways once dropped, this is all we need to know to
    /// find where the next shape lands.
    profile: Vec<usize>,

    /// Rows below the lowest column that have been thrown away. Add this to any profile entry to get a true height.
    height_offset: usize,

    /// A reference to the built catalog, shared by every board.
    pub catalog: &'a ShapeCatalog,
}

impl<'a> Board<'a> {
    /// Returns a new, empty board with the given number of columns.
    pub fn new<'p>(width: usize, catalog: &'p ShapeCatalog) -> Result<Board<'p>> {
        if width == 0 {
            return Err(EngineError::InvalidWidth { width }.into());
        }
        Ok(Board::_empty(width, catalog))
    }

    /// Returns a new, empty board of the standard width.
    pub fn with_default_width<'p>(catalog: &'p ShapeCatalog) -> Board<'p> {
        Board::_empty(DEFAULT_BOARD_WIDTH, catalog)
    }

    /// The true height of the tallest column.
    pub fn get_height(&self) -> usize {
        self.max_profile() + self.height_offset
    }

    /// The skyline under `width` columns starting at `offset`.
    pub fn get_profile(&self, offset: isize, width: usize) -> Result<&[usize]> {
        let start = self.footprint(offset, width)?;
        Ok(&self.profile[start..start + width])
    }

    /// Rows discarded by compaction so far.
    pub fn height_offset(&self) -> usize {
        self.height_offset
    }

    /// The number of rows currently held in memory.
    pub fn live_rows(&self) -> usize {
        self.rows.len()
    }

    /// The whole skyline in the current frame.
    pub fn profile(&self) -> &[usize] {
        &self.profile
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Parses and plays a move token such as `I3`.
    pub fn play_move(&mut self, mv: &str) -> Result<()> {
        let mv = mv.parse::<MoveString>()?;
        self.play(&mv)
    }

    /// Plays a parsed move: drop, clear, compact. Nothing is touched unless the shape fits.
    pub fn play(&mut self, mv: &MoveString) -> Result<()> {
        let catalog = self.catalog;
        let shape = catalog.get(mv.kind);
        self.footprint(mv.offset, shape.width)?;

        log::debug!("playing {} at height {}", shape.notate(mv.offset), self.get_height());

        self.ensure_capacity(shape);
        self.drop_shape_at(shape, mv.offset)?;
        let cleared = self.clear_complete_rows();
        let dropped = self.drop_unreachable_rows();

        log::debug!("cleared {cleared} rows, compacted {dropped} rows, height now {}", self.get_height());
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("board after {}:\n{}", mv.repr, self.pretty());
        }
        Ok(())
    }

    /// Plays the moves in order, yielding the height after each one.
    ///
    /// Nothing happens until the iterator is advanced, and the caller may stop early. The first
    /// move that fails is yielded as an error and ends the sequence; the moves after it are
    /// never played.
    pub fn play_sequence<'b, I>(&'b mut self, moves: I) -> Heights<'b, 'a, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Heights::new(self, moves.into_iter())
    }

    // accessors

    pub(super) fn max_profile(&self) -> usize {
        self.profile.iter().copied().max().unwrap_or(0)
    }

    pub(super) fn min_profile(&self) -> usize {
        self.profile.iter().copied().min().unwrap_or(0)
    }

    /// Checks that `width` columns starting at `offset` lie on the board, returning the first column.
    pub(super) fn footprint(&self, offset: isize, width: usize) -> Result<usize> {
        usize::try_from(offset)
            .ok()
            .filter(|start| start.checked_add(width).is_some_and(|end| end <= self.width))
            .ok_or_else(|| EngineError::OutOfBounds { offset, width, bounds: self.width }.into())
    }

    fn _empty<'p>(width: usize, catalog: &'p ShapeCatalog) -> Board<'p> {
        Board {
            width,
            rows: vec![Row::empty(width); INITIAL_ROWS],
            profile: vec![0; width],
            height_offset: 0,
            catalog,
        }
    }
}
