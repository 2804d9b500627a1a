use thiserror::Error;

/// Errors reported at the operation boundary.
///
/// Malformed cell data is silently normalized; malformed parameters are
/// rejected here instead of corrupting the grid shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("column count must be at least 1")]
    InvalidColumnCount,

    #[error("column index {index} out of range for {count} columns")]
    ColumnOutOfRange { index: usize, count: usize },

    #[error("row index {index} out of range for {count} rows")]
    RowOutOfRange { index: usize, count: usize },

    #[error("cannot delete the only remaining column")]
    LastColumn,

    #[error("row 0 is the header row and cannot be moved or deleted")]
    HeaderRow,

    #[error("grid already has a header row")]
    HeaderExists,

    #[error("grid has no header row")]
    NoHeader,
}
