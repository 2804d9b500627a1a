//! Zebra-stripe toggle and parity recompute.
//!
//! Striping is a pure function of row position and the header flag: with a
//! header present every data row's stripe index is offset by one, and the
//! header row itself is never striped. The recompute is idempotent.

use crate::grid::Grid;
use crate::position::row_of;

/// Whether the row at position `row` is striped under the parity rule
pub(crate) fn stripe_parity(row: usize, with_header: bool) -> bool {
    let stripe_index = if with_header { row + 1 } else { row };
    stripe_index % 2 != 0
}

impl Grid {
    /// Re-derive every cell's stripe flag from its row position.
    ///
    /// Clears every flag when striping is off, so callers can run it
    /// unconditionally after a structural change.
    pub(crate) fn restripe(&mut self) {
        let column_count = self.column_count;
        let with_header = self.with_header;
        let with_stripe = self.with_stripe;

        for cell in &mut self.items {
            let row = row_of(cell.index, column_count);
            cell.is_stripe = if !with_stripe || (with_header && row == 0) {
                false
            } else {
                stripe_parity(row, with_header)
            };
        }
    }

    /// Turn zebra striping on and stamp the parity flags
    pub fn add_zebra_stripe(&self) -> Grid {
        let mut grid = self.clone();
        grid.with_stripe = true;
        grid.restripe();
        grid
    }

    /// Turn zebra striping off and clear every stripe flag
    pub fn delete_zebra_stripe(&self) -> Grid {
        let mut grid = self.clone();
        grid.with_stripe = false;
        for cell in &mut grid.items {
            cell.is_stripe = false;
        }
        grid
    }

    /// The host's stripe settings button: add when off, remove when on
    pub fn toggle_zebra_stripe(&self) -> Grid {
        if self.with_stripe {
            self.delete_zebra_stripe()
        } else {
            self.add_zebra_stripe()
        }
    }
}
