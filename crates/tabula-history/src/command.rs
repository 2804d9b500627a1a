use tabula_core::{Align, ColumnDirection, Grid, GridError, RowDirection};

/// Type alias for boxed commands
pub type CommandBox = Box<dyn GridCommand>;

/// Trait for undoable structural operations.
///
/// Engine operations are functional (grid in, grid out), so every command
/// captures the predecessor grid on apply and undo restores it outright.
pub trait GridCommand: std::fmt::Debug + Send + Sync {
    /// Run the operation, replacing `grid` with the transformed state.
    ///
    /// On an error the grid is left untouched and nothing is captured.
    fn apply(&mut self, grid: &mut Grid) -> Result<(), GridError>;

    /// Restore the state captured by the last `apply`
    fn undo(&mut self, grid: &mut Grid);

    /// Get a description of this command (for UI display)
    fn description(&self) -> &str;
}

/// The structural operation a command performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralOp {
    AddRow(usize),
    DeleteRow(usize),
    MoveRow(usize, RowDirection),
    AddColumn(usize),
    DeleteColumn(usize),
    MoveColumn(usize, ColumnDirection),
    SetColumnAlign(usize, Align),
    ToggleHeader,
    ToggleZebraStripe,
}

impl StructuralOp {
    fn run(&self, grid: &Grid) -> Result<Grid, GridError> {
        match *self {
            StructuralOp::AddRow(row) => grid.add_row(row),
            StructuralOp::DeleteRow(row) => grid.delete_row(row),
            StructuralOp::MoveRow(row, direction) => grid.move_row(row, direction),
            StructuralOp::AddColumn(column) => grid.add_column(column),
            StructuralOp::DeleteColumn(column) => grid.delete_column(column),
            StructuralOp::MoveColumn(column, direction) => grid.move_column(column, direction),
            StructuralOp::SetColumnAlign(column, align) => grid.set_column_align(column, align),
            StructuralOp::ToggleHeader => grid.toggle_header(),
            StructuralOp::ToggleZebraStripe => Ok(grid.toggle_zebra_stripe()),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            StructuralOp::AddRow(_) => "Add row",
            StructuralOp::DeleteRow(_) => "Delete row",
            StructuralOp::MoveRow(..) => "Move row",
            StructuralOp::AddColumn(_) => "Add column",
            StructuralOp::DeleteColumn(_) => "Delete column",
            StructuralOp::MoveColumn(..) => "Move column",
            StructuralOp::SetColumnAlign(..) => "Set column alignment",
            StructuralOp::ToggleHeader => "Toggle header",
            StructuralOp::ToggleZebraStripe => "Toggle zebra stripes",
        }
    }
}

/// A structural edit with snapshot undo
#[derive(Debug)]
pub struct StructuralCommand {
    op: StructuralOp,
    previous: Option<Grid>,
}

impl StructuralCommand {
    pub fn new(op: StructuralOp) -> Self {
        Self { op, previous: None }
    }
}

impl GridCommand for StructuralCommand {
    fn apply(&mut self, grid: &mut Grid) -> Result<(), GridError> {
        let next = self.op.run(grid)?;
        self.previous = Some(std::mem::replace(grid, next));
        Ok(())
    }

    fn undo(&mut self, grid: &mut Grid) {
        if let Some(previous) = self.previous.take() {
            *grid = previous;
        }
    }

    fn description(&self) -> &str {
        self.op.description()
    }
}
