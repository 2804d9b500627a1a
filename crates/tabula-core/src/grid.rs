use serde::{Deserialize, Serialize};

use crate::cell::{holder_cells, Cell};
use crate::error::GridError;

/// Column count of a freshly created table
pub const DEFAULT_COLUMN_COUNT: usize = 2;
/// Row count of a freshly created table
pub const DEFAULT_ROW_COUNT: usize = 2;

/// The full table state: a fixed column count, a flat row-major cell
/// sequence, and the header/stripe feature flags.
///
/// Invariant: after normalization `items.len()` is an exact multiple of
/// `column_count` and every cell's `index` equals its position in `items`.
/// Every structural operation consumes a normalized grid and returns a new
/// normalized grid; the caller discards the old state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub column_count: usize,
    pub items: Vec<Cell>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub with_header: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub with_stripe: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Default for Grid {
    /// The starter document: an empty 2×2 table
    fn default() -> Self {
        let mut grid = Grid::new(
            DEFAULT_COLUMN_COUNT,
            holder_cells(DEFAULT_COLUMN_COUNT * DEFAULT_ROW_COUNT),
        );
        grid.renumber();
        grid
    }
}

impl Grid {
    /// Build a grid from raw parts.
    ///
    /// The result may be ragged or carry stale index caches; run
    /// [`Grid::normalize`] before operating on it.
    pub fn new(column_count: usize, items: Vec<Cell>) -> Self {
        Grid {
            column_count,
            items,
            with_header: false,
            with_stripe: false,
        }
    }

    /// Pad the cell sequence to a rectangular `column_count × row_count`
    /// shape and re-stamp every cell's position cache.
    ///
    /// Loaded data goes through here before the first operation or render.
    /// An empty grid normalizes to zero padded cells.
    pub fn normalize(mut self) -> Result<Grid, GridError> {
        if self.column_count == 0 {
            return Err(GridError::InvalidColumnCount);
        }

        let missing =
            self.column_count * self.items.len().div_ceil(self.column_count) - self.items.len();
        self.items.extend(holder_cells(missing));
        self.renumber();

        Ok(self)
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.items.len() / self.column_count
    }

    /// Iterate over the rows as contiguous slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.items.chunks(self.column_count)
    }

    /// Get the cell at the given row and column position
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        if column >= self.column_count {
            return None;
        }
        self.items.get(row * self.column_count + column)
    }

    /// Check if the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Re-stamp every cell's `index` with its position in the sequence
    pub(crate) fn renumber(&mut self) {
        for (position, cell) in self.items.iter_mut().enumerate() {
            cell.index = position;
        }
    }

    /// Carry the feature flags into a reshaped cell sequence and re-stamp
    /// the index cache. The shared tail of every structural operation.
    pub(crate) fn rebuilt(&self, column_count: usize, items: Vec<Cell>) -> Grid {
        let mut grid = Grid {
            column_count,
            items,
            with_header: self.with_header,
            with_stripe: self.with_stripe,
        };
        grid.renumber();
        grid
    }

    pub(crate) fn check_column(&self, index: usize) -> Result<(), GridError> {
        if index >= self.column_count {
            return Err(GridError::ColumnOutOfRange {
                index,
                count: self.column_count,
            });
        }
        Ok(())
    }

    pub(crate) fn check_row(&self, index: usize) -> Result<(), GridError> {
        if index >= self.row_count() {
            return Err(GridError::RowOutOfRange {
                index,
                count: self.row_count(),
            });
        }
        Ok(())
    }
}

/// Test helper: the cell texts in flat row-major order
#[cfg(test)]
pub(crate) fn texts(grid: &Grid) -> Vec<&str> {
    grid.items.iter().map(|cell| cell.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Align;

    #[test]
    fn test_normalize_pads_to_rectangle() {
        let cells = vec![Cell::text("a"), Cell::text("b"), Cell::text("c")];
        let grid = Grid::new(2, cells).normalize().unwrap();

        assert_eq!(grid.items.len(), 4);
        assert_eq!(grid.items.len() % grid.column_count, 0);
        assert_eq!(texts(&grid), vec!["a", "b", "c", ""]);
    }

    #[test]
    fn test_normalize_stamps_indices() {
        let cells = vec![Cell::text("a"), Cell::text("b"), Cell::text("c")];
        let grid = Grid::new(2, cells).normalize().unwrap();

        for (position, cell) in grid.items.iter().enumerate() {
            assert_eq!(cell.index, position);
        }
    }

    #[test]
    fn test_normalize_empty_grid() {
        let grid = Grid::new(3, Vec::new()).normalize().unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_normalize_rejects_zero_columns() {
        let err = Grid::new(0, vec![Cell::text("a")]).normalize().unwrap_err();
        assert_eq!(err, GridError::InvalidColumnCount);
    }

    #[test]
    fn test_normalize_already_rectangular() {
        let cells = vec![Cell::text("a"), Cell::text("b")];
        let grid = Grid::new(2, cells).normalize().unwrap();
        assert_eq!(grid.items.len(), 2);
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn test_default_grid() {
        let grid = Grid::default();
        assert_eq!(grid.column_count, 2);
        assert_eq!(grid.row_count(), 2);
        assert!(grid.items.iter().all(Cell::is_empty));
        assert!(!grid.with_header);
        assert!(!grid.with_stripe);
    }

    #[test]
    fn test_rows_and_get() {
        let cells = vec![
            Cell::text("a"),
            Cell::text("b"),
            Cell::text("c"),
            Cell::text("d"),
        ];
        let grid = Grid::new(2, cells).normalize().unwrap();

        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0].text, "c");

        assert_eq!(grid.get(0, 1).unwrap().text, "b");
        assert_eq!(grid.get(1, 1).unwrap().text, "d");
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 2).is_none());
    }

    #[test]
    fn test_load_host_json() {
        // The host saves camelCase keys and may omit flags and indices
        let json = r#"{
            "columnCount": 2,
            "items": [
                {"text": "name", "align": "center"},
                {"text": "age"},
                {"text": "ada"},
                {"text": "36", "width": "80px"}
            ],
            "withHeader": true
        }"#;

        let grid: Grid = serde_json::from_str(json).unwrap();
        let grid = grid.normalize().unwrap();

        assert_eq!(grid.column_count, 2);
        assert!(grid.with_header);
        assert!(!grid.with_stripe);
        assert_eq!(grid.items[0].align, Align::Center);
        assert_eq!(grid.items[1].align, Align::Left);
        assert_eq!(grid.items[3].width.as_deref(), Some("80px"));
        assert_eq!(grid.items[3].index, 3);
    }

    #[test]
    fn test_save_round_trip() {
        let grid = Grid::new(2, vec![Cell::text("a"), Cell::text("b")])
            .normalize()
            .unwrap();

        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["columnCount"], 2);
        // Off flags are omitted from the save payload
        assert!(json.get("withHeader").is_none());

        let back: Grid = serde_json::from_value(json).unwrap();
        assert_eq!(back, grid);
    }
}
