//! Error types for the todo.txt task manager.
//!
//! Parsing never fails by contract - malformed lines degrade to body
//! text. Only operations that address a task by id or supply a priority
//! token can error, and both are terminal for the command being run.

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// All errors the task collection can raise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The given task id does not exist in the collection.
    #[error("Don't know task #{0}")]
    TaskNotFound(usize),

    /// The supplied priority is not a single A-Z letter.
    #[error("Don't know priority '{0}'")]
    InvalidPriority(String),
}
