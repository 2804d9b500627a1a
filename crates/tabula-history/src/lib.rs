pub mod command;
pub mod stack;

pub use command::{CommandBox, GridCommand, StructuralCommand, StructuralOp};
pub use stack::HistoryManager;
