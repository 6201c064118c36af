//! Whole-file persistence for the task list.
//!
//! The backing store is a plain todo.txt file, one task per line. It is
//! read once at startup and rewritten in full after every mutating
//! command; there are no partial writes.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::todo::TaskList;

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Resolve the backing file: the `TODO_FILE` environment variable
    /// when set, otherwise `todo.txt` in the user's documents folder
    /// (falling back to the home directory, then the working directory).
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("TODO_FILE")
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("todo.txt")
    }

    /// Load the task list, skipping blank lines. A missing file is an
    /// empty list.
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            return Ok(TaskList::new());
        }
        let content = fs::read_to_string(&self.file_path)?;
        Ok(TaskList::from_lines(
            content.lines().filter(|line| !line.trim().is_empty()),
        ))
    }

    /// Overwrite the file with every task's line.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let mut content = tasks.to_lines().join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
