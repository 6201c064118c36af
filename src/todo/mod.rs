//! Core todo.txt domain: parsing, the task entity, and the collection.
//!
//! Split into submodules:
//! - `dates`: relative due-date resolution
//! - `task`: line parser, task entity, line rendering
//! - `task_list`: the ordered collection and its queries

mod dates;
mod task;
mod task_list;

pub use dates::{local_date_today, resolve_relative_due, resolve_relative_due_on};
pub use task::{CANONICAL_FIELDS, DISPLAY_FIELDS, DueStatus, Field, Task};
pub use task_list::TaskList;
