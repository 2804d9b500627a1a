//! Header-row toggle.
//!
//! The header is a synthesized row 0, flagged on every cell; at most one
//! exists. It inherits each column's alignment from the row directly below
//! so a freshly added header lines up with its data.

use crate::cell::{Align, Cell};
use crate::error::GridError;
use crate::grid::Grid;

impl Grid {
    /// Insert a header row at position 0 and set `with_header`.
    ///
    /// Each header cell copies the alignment of the cell directly below
    /// it. Striping is recomputed: data rows shift by one stripe position.
    pub fn add_header(&self) -> Result<Grid, GridError> {
        if self.with_header {
            return Err(GridError::HeaderExists);
        }

        let mut items: Vec<Cell> = Vec::with_capacity(self.items.len() + self.column_count);
        for column in 0..self.column_count {
            let align = self
                .items
                .get(column)
                .map_or(Align::default(), |below| below.align);
            let mut cell = Cell::empty().with_align(align);
            cell.is_header = true;
            items.push(cell);
        }
        items.extend(self.items.iter().cloned());

        let mut grid = Grid {
            column_count: self.column_count,
            items,
            with_header: true,
            with_stripe: self.with_stripe,
        };
        grid.renumber();
        grid.restripe();
        Ok(grid)
    }

    /// Remove the header row and clear `with_header`.
    ///
    /// Striping is recomputed: the first data row becomes row 0.
    pub fn delete_header(&self) -> Result<Grid, GridError> {
        if !self.with_header {
            return Err(GridError::NoHeader);
        }

        let items: Vec<Cell> = self.items.iter().skip(self.column_count).cloned().collect();

        let mut grid = Grid {
            column_count: self.column_count,
            items,
            with_header: false,
            with_stripe: self.with_stripe,
        };
        grid.renumber();
        grid.restripe();
        Ok(grid)
    }

    /// The host's header settings button: add when absent, remove when
    /// present.
    pub fn toggle_header(&self) -> Result<Grid, GridError> {
        if self.with_header {
            self.delete_header()
        } else {
            self.add_header()
        }
    }
}
