use crate::tetris::prelude::*;

impl<'a> Board<'a> {
    /// Appends `n` empty rows on top of the live terrain.
    pub fn add_rows(&mut self, n: usize) {
        let width = self.width;
        self.rows.resize_with(self.rows.len() + n, || Row::empty(width));
    }

    /// Grows the board in batches until the shape can land on the tallest column without
    /// running off the top. Returns the number of rows added.
    pub fn ensure_capacity(&mut self, shape: &Shape) -> usize {
        let mut added = 0;
        while shape.height >= self.rows.len().saturating_sub(self.max_profile()) {
            self.add_rows(ROW_BATCH);
            added += ROW_BATCH;
        }
        if added > 0 {
            log::trace!("grew board by {added} rows to {}", self.rows.len());
        }
        added
    }

    /// Drops a shape with its leftmost column at `dx` and settles it on the terrain.
    ///
    /// The shape comes to rest at the first collision, so over its footprint the landing row is
    /// the largest of `terrain height + shape depth`. Only the footprint of the skyline is read,
    /// so this costs the same no matter how tall the board has grown.
    pub fn drop_shape_at(&mut self, shape: &Shape, dx: isize) -> Result<()> {
        let dy = self.get_profile(dx, shape.width)?
            .iter()
            .zip(shape.profile())
            .map(|(terrain, depth)| terrain + depth)
            .max()
            .unwrap_or(0);
        let dx = self.footprint(dx, shape.width)?;

        self.ensure_capacity(shape); // no-op when called through play()

        for block in &shape.coordinates {
            let Cell { col, row } = Cell::landed(block, dx, dy);
            self.rows[row].fill(col);
            self.profile[col] = self.profile[col].max(row);
        }
        Ok(())
    }

    /// Removes every full row, keeping the rest in order. Returns the number of rows removed.
    ///
    /// Every column's recorded height drops by the number of rows removed, clamped at zero. A column
    /// whose top cell was cleared keeps that lowered height even when there is a hole beneath it.
    pub fn clear_complete_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row.is_complete());
        let cleared = before - self.rows.len();

        if cleared > 0 {
            self.profile.iter_mut().for_each(|h| *h = h.saturating_sub(cleared));
        }
        cleared
    }

    /// Discards every row below the lowest column, since no shape can reach them any more, and
    /// moves the discarded count into the height offset. Returns the number of rows discarded.
    pub fn drop_unreachable_rows(&mut self) -> usize {
        let floor = self.min_profile();
        if floor > 0 {
            self.rows.drain(..floor);
            self.profile.iter_mut().for_each(|h| *h -= floor);
            self.height_offset += floor;
        }
        floor
    }
}
