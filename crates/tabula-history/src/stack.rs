use crate::command::CommandBox;
use tabula_core::{Grid, GridError};

/// Manages undo/redo history for grid operations
#[derive(Default)]
pub struct HistoryManager {
    /// Stack of commands that can be undone
    undo_stack: Vec<CommandBox>,
    /// Stack of commands that can be redone
    redo_stack: Vec<CommandBox>,
    /// Maximum number of undo levels
    max_size: usize,
}

impl HistoryManager {
    /// Create a new history manager with the specified max undo levels
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Apply a command and add it to the undo stack.
    ///
    /// A failed command leaves the grid and both stacks untouched.
    pub fn execute(&mut self, mut command: CommandBox, grid: &mut Grid) -> Result<(), GridError> {
        command.apply(grid)?;

        // Clear redo stack on new action
        self.redo_stack.clear();

        self.undo_stack.push(command);

        // Limit stack size
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }

        Ok(())
    }

    /// Undo the last command; returns false when there is nothing to undo
    pub fn undo(&mut self, grid: &mut Grid) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        command.undo(grid);
        self.redo_stack.push(command);
        true
    }

    /// Redo the last undone command; returns false when there is nothing
    /// to redo.
    pub fn redo(&mut self, grid: &mut Grid) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        // Commands are deterministic, and a command that reached the undo
        // stack already applied cleanly once.
        if command.apply(grid).is_err() {
            return false;
        }
        self.undo_stack.push(command);
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the description of the command that would be undone
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Get the description of the command that would be redone
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Get the number of commands in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl std::fmt::Debug for HistoryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("undo_count", &self.undo_stack.len())
            .field("redo_count", &self.redo_stack.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}
