//! Row operations.
//!
//! Rows are contiguous runs of `column_count` cells in the flat sequence,
//! so the reshape is plain chunking. The header row, when present, is
//! pinned: it is never a move source, move target, or wraparound stop, and
//! generic row deletion refuses it.

use serde::{Deserialize, Serialize};

use crate::cell::{holder_cells, Cell};
use crate::error::GridError;
use crate::grid::Grid;
use crate::stripe::stripe_parity;

/// Direction parameter for [`Grid::move_row`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowDirection {
    Up,
    Down,
}

impl Grid {
    /// Split the flat sequence into contiguous rows
    fn split_rows(&self) -> Vec<Vec<Cell>> {
        self.items
            .chunks(self.column_count)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    fn flatten_rows(rows: Vec<Vec<Cell>>) -> Vec<Cell> {
        rows.into_iter().flatten().collect()
    }

    /// Insert a new empty row immediately after `row_index`.
    ///
    /// With striping active the new row's stripe flag is pre-set from the
    /// parity rule for its landing position, so this case needs no full
    /// recompute. The landing position is never row 0, so the header
    /// exclusion cannot apply here.
    pub fn add_row(&self, row_index: usize) -> Result<Grid, GridError> {
        self.check_row(row_index)?;

        let landing = row_index + 1;
        let mut fresh = holder_cells(self.column_count);
        if self.with_stripe {
            let striped = stripe_parity(landing, self.with_header);
            for cell in &mut fresh {
                cell.is_stripe = striped;
            }
        }

        let mut rows = self.split_rows();
        rows.insert(landing, fresh);

        Ok(self.rebuilt(self.column_count, Self::flatten_rows(rows)))
    }

    /// Delete the row at `row_index`, then recompute zebra striping over
    /// the whole grid — removal shifts every subsequent row's parity.
    ///
    /// The header row is only removed through [`Grid::delete_header`].
    pub fn delete_row(&self, row_index: usize) -> Result<Grid, GridError> {
        self.check_row(row_index)?;
        if self.with_header && row_index == 0 {
            return Err(GridError::HeaderRow);
        }

        let mut rows = self.split_rows();
        rows.remove(row_index);

        let mut grid = self.rebuilt(self.column_count, Self::flatten_rows(rows));
        grid.restripe();
        Ok(grid)
    }

    /// Swap the row at `row_index` with its neighbor, wrapping around the
    /// edges. With a header present the wraparound skips row 0: up from
    /// row 1 targets the last row, down from the last row targets row 1.
    ///
    /// Stripe parity is recomputed after the swap. With a single movable
    /// row the target equals the source and the move is the identity.
    pub fn move_row(&self, row_index: usize, direction: RowDirection) -> Result<Grid, GridError> {
        self.check_row(row_index)?;
        if self.with_header && row_index == 0 {
            return Err(GridError::HeaderRow);
        }

        let first = if self.with_header { 1 } else { 0 };
        let last = self.row_count() - 1;
        let target = match direction {
            RowDirection::Up => {
                if row_index == first {
                    last
                } else {
                    row_index - 1
                }
            }
            RowDirection::Down => {
                if row_index == last {
                    first
                } else {
                    row_index + 1
                }
            }
        };

        let mut rows = self.split_rows();
        rows.swap(row_index, target);

        let mut grid = self.rebuilt(self.column_count, Self::flatten_rows(rows));
        grid.restripe();
        Ok(grid)
    }
}
