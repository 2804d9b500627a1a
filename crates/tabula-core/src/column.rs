//! Column operations.
//!
//! Columns are not contiguous in the flat row-major sequence, so every
//! operation here reshapes the grid into column-major "tanks" (one ordered
//! bucket per column), edits the tank list, and flattens back. Tank lengths
//! are always equal because the input grid is normalized.

use serde::{Deserialize, Serialize};

use crate::cell::{holder_cells, Align, Cell};
use crate::error::GridError;
use crate::grid::Grid;
use crate::position::column_of;

/// Direction parameter for [`Grid::move_column`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnDirection {
    Left,
    Right,
}

impl Grid {
    /// Bucket the flat sequence into one tank per column, each holding
    /// that column's cells in top-to-bottom row order.
    fn build_tanks(&self) -> Vec<Vec<Cell>> {
        let mut tanks: Vec<Vec<Cell>> = vec![Vec::with_capacity(self.row_count()); self.column_count];

        for cell in &self.items {
            tanks[column_of(cell.index, self.column_count)].push(cell.clone());
        }

        tanks
    }

    /// Inverse of the bucketing: walk row positions and take that row's
    /// cell from every tank in tank order. Reproduces row-major order
    /// exactly when the tank order is unchanged.
    fn flatten_tanks(tanks: Vec<Vec<Cell>>) -> Vec<Cell> {
        let row_len = tanks.first().map_or(0, Vec::len);
        let mut items = Vec::with_capacity(row_len * tanks.len());

        for row in 0..row_len {
            for tank in &tanks {
                items.push(tank[row].clone());
            }
        }

        items
    }

    /// Insert a new empty column immediately after `column_index`.
    ///
    /// The new cells carry no preset attributes beyond the defaults.
    pub fn add_column(&self, column_index: usize) -> Result<Grid, GridError> {
        self.check_column(column_index)?;

        let mut tanks = self.build_tanks();
        tanks.insert(column_index + 1, holder_cells(self.row_count()));

        Ok(self.rebuilt(self.column_count + 1, Self::flatten_tanks(tanks)))
    }

    /// Delete the column at `column_index`.
    ///
    /// The last remaining column cannot be deleted; the grid never reaches
    /// a zero column count.
    pub fn delete_column(&self, column_index: usize) -> Result<Grid, GridError> {
        self.check_column(column_index)?;
        if self.column_count == 1 {
            return Err(GridError::LastColumn);
        }

        let mut tanks = self.build_tanks();
        tanks.remove(column_index);

        Ok(self.rebuilt(self.column_count - 1, Self::flatten_tanks(tanks)))
    }

    /// Swap the column at `column_index` with its neighbor, wrapping
    /// around the edges: left from column 0 targets the last column, right
    /// from the last column targets column 0.
    ///
    /// Each column's internal cell sequence and attributes travel with its
    /// tank. In a single-column grid the target equals the source and the
    /// move is the identity.
    pub fn move_column(
        &self,
        column_index: usize,
        direction: ColumnDirection,
    ) -> Result<Grid, GridError> {
        self.check_column(column_index)?;

        let last = self.column_count - 1;
        let target = match direction {
            ColumnDirection::Left => {
                if column_index == 0 {
                    last
                } else {
                    column_index - 1
                }
            }
            ColumnDirection::Right => {
                if column_index == last {
                    0
                } else {
                    column_index + 1
                }
            }
        };

        let mut tanks = self.build_tanks();
        tanks.swap(column_index, target);

        Ok(self.rebuilt(self.column_count, Self::flatten_tanks(tanks)))
    }

    /// Set the alignment of every cell in the column at `column_index`.
    ///
    /// The only way alignment is mutated: always whole-column, never
    /// per-cell.
    pub fn set_column_align(&self, column_index: usize, align: Align) -> Result<Grid, GridError> {
        self.check_column(column_index)?;

        let mut tanks = self.build_tanks();
        for cell in &mut tanks[column_index] {
            cell.align = align;
        }

        Ok(self.rebuilt(self.column_count, Self::flatten_tanks(tanks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::texts;

    fn two_by_two() -> Grid {
        Grid::new(
            2,
            vec![
                Cell::text("a"),
                Cell::text("b"),
                Cell::text("c"),
                Cell::text("d"),
            ],
        )
        .normalize()
        .unwrap()
    }

    #[test]
    fn test_add_column_after_first() {
        let grid = two_by_two().add_column(0).unwrap();

        assert_eq!(grid.column_count, 3);
        assert_eq!(texts(&grid), vec!["a", "", "b", "c", "", "d"]);
    }

    #[test]
    fn test_add_column_at_end() {
        let grid = two_by_two().add_column(1).unwrap();

        assert_eq!(grid.column_count, 3);
        assert_eq!(texts(&grid), vec!["a", "b", "", "c", "d", ""]);
    }

    #[test]
    fn test_add_column_restamps_indices() {
        let grid = two_by_two().add_column(0).unwrap();

        for (position, cell) in grid.items.iter().enumerate() {
            assert_eq!(cell.index, position);
        }
        assert_eq!(grid.items.len() % grid.column_count, 0);
    }

    #[test]
    fn test_delete_column() {
        let grid = two_by_two().delete_column(0).unwrap();

        assert_eq!(grid.column_count, 1);
        assert_eq!(texts(&grid), vec!["b", "d"]);
    }

    #[test]
    fn test_delete_last_column_rejected() {
        let grid = Grid::new(1, vec![Cell::text("a"), Cell::text("b")])
            .normalize()
            .unwrap();

        assert_eq!(grid.delete_column(0).unwrap_err(), GridError::LastColumn);
    }

    #[test]
    fn test_move_column_left() {
        let grid = two_by_two().move_column(1, ColumnDirection::Left).unwrap();
        assert_eq!(texts(&grid), vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn test_move_column_left_wraps_to_last() {
        let grid = Grid::new(
            3,
            vec![
                Cell::text("a"),
                Cell::text("b"),
                Cell::text("c"),
                Cell::text("d"),
                Cell::text("e"),
                Cell::text("f"),
            ],
        )
        .normalize()
        .unwrap();

        let moved = grid.move_column(0, ColumnDirection::Left).unwrap();
        assert_eq!(texts(&moved), vec!["c", "b", "a", "f", "e", "d"]);
    }

    #[test]
    fn test_move_column_right_wraps_to_first() {
        let grid = two_by_two().move_column(1, ColumnDirection::Right).unwrap();
        assert_eq!(texts(&grid), vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn test_move_single_column_is_identity() {
        let grid = Grid::new(1, vec![Cell::text("a"), Cell::text("b")])
            .normalize()
            .unwrap();

        let moved = grid.move_column(0, ColumnDirection::Left).unwrap();
        assert_eq!(moved, grid);
    }

    #[test]
    fn test_move_column_carries_alignment() {
        let grid = two_by_two().set_column_align(0, Align::Right).unwrap();
        let moved = grid.move_column(0, ColumnDirection::Right).unwrap();

        // The aligned column is now on the right, attributes intact
        assert_eq!(moved.get(0, 1).unwrap().align, Align::Right);
        assert_eq!(moved.get(1, 1).unwrap().align, Align::Right);
        assert_eq!(moved.get(0, 0).unwrap().align, Align::Left);
    }

    #[test]
    fn test_set_column_align_whole_column() {
        let grid = two_by_two().set_column_align(1, Align::Center).unwrap();

        assert_eq!(grid.get(0, 1).unwrap().align, Align::Center);
        assert_eq!(grid.get(1, 1).unwrap().align, Align::Center);
        assert_eq!(grid.get(0, 0).unwrap().align, Align::Left);
        assert_eq!(grid.get(1, 0).unwrap().align, Align::Left);
    }

    #[test]
    fn test_column_index_out_of_range() {
        let grid = two_by_two();

        assert_eq!(
            grid.add_column(2).unwrap_err(),
            GridError::ColumnOutOfRange { index: 2, count: 2 }
        );
        assert_eq!(
            grid.delete_column(5).unwrap_err(),
            GridError::ColumnOutOfRange { index: 5, count: 2 }
        );
        assert_eq!(
            grid.move_column(2, ColumnDirection::Left).unwrap_err(),
            GridError::ColumnOutOfRange { index: 2, count: 2 }
        );
        assert_eq!(
            grid.set_column_align(2, Align::Center).unwrap_err(),
            GridError::ColumnOutOfRange { index: 2, count: 2 }
        );
    }

    #[test]
    fn test_tank_round_trip_is_stable() {
        let grid = two_by_two();

        // A move to a neighbor and back reproduces the original sequence
        let there = grid.move_column(0, ColumnDirection::Right).unwrap();
        let back = there.move_column(1, ColumnDirection::Left).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_direction_wire_values() {
        assert_eq!(
            serde_json::to_string(&ColumnDirection::Left).unwrap(),
            "\"left\""
        );
        let direction: ColumnDirection = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(direction, ColumnDirection::Right);
    }
}
