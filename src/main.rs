//! todo - command-line task management in the todo.txt format.
//!
//! The task file is loaded once, the requested command mutates the
//! in-memory list, a successful mutation rewrites the file wholesale,
//! and every invocation ends with the grouped listing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todotxt::{Storage, formatting};

/// Plain-text task management in the todo.txt format.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the task file (default: $TODO_FILE, then todo.txt in the
    /// documents folder)
    #[arg(long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task; a leading single letter sets the priority
    #[command(visible_alias = "a")]
    Add {
        /// Task text in todo.txt syntax
        text: Vec<String>,
    },
    /// Mark a task completed
    Do {
        /// Task id from the listing
        id: usize,
    },
    /// Set a task's priority
    #[command(visible_alias = "p")]
    Pri {
        /// Task id from the listing
        id: usize,
        /// Single letter, A-Z
        priority: String,
    },
    /// Show active tasks grouped by project (the default)
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let storage = Storage::new(cli.file.unwrap_or_else(Storage::default_path));
    let mut tasks = storage.load()?;

    match cli.command {
        Some(Command::Add { text }) => {
            tasks.add(&text.join(" "));
            storage.save(&tasks)?;
        }
        Some(Command::Do { id }) => {
            tasks.complete(id)?;
            storage.save(&tasks)?;
            println!("Task {id} completed.");
        }
        Some(Command::Pri { id, priority }) => {
            tasks.set_priority(id, &priority)?;
            storage.save(&tasks)?;
        }
        Some(Command::List) | None => {}
    }

    println!();
    print!("{}", formatting::render_active_by_project(&tasks));
    Ok(())
}
