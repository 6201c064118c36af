//! todo.txt task management library.
//!
//! Parses, queries, mutates, and re-renders tasks kept in the todo.txt
//! plain-text format: one task per line, combining optional
//! completion/priority/date prefixes with free text and `+project` /
//! `@context` tags. Informal due dates (`due:tomorrow`, `due:friday`)
//! are resolved to absolute dates at parse time.
//!
//! # Architecture
//!
//! - **Domain layer**: `todo` module - relative-date resolution, the
//!   line parser, the task entity, and the task list
//! - **Persistence layer**: `storage` module - whole-file load/save of
//!   the flat line format
//! - **Presentation layer**: `formatting` module - grouped, colored
//!   listings for the CLI
//!
//! # Example
//!
//! ```
//! use todotxt::TaskList;
//!
//! let mut tasks = TaskList::new();
//! tasks.add("(A) Call Mom +Family @Phone due:2024-03-01");
//! assert_eq!(tasks.tasks()[0].priority, Some('A'));
//! assert_eq!(tasks.tasks()[0].projects, vec!["+Family"]);
//! ```

mod error;
pub mod formatting;
mod storage;
mod todo;

pub use error::{Result, TodoError};
pub use storage::Storage;
pub use todo::{
    CANONICAL_FIELDS, DISPLAY_FIELDS, DueStatus, Field, Task, TaskList, local_date_today,
    resolve_relative_due, resolve_relative_due_on,
};
