//! Display formatting for the grouped task listing.
//!
//! Rendering only: the listing layout and the per-priority colors live
//! here, the grouping and ordering come from the task list itself.

use crate::todo::{DISPLAY_FIELDS, Task, TaskList};
use colored::{ColoredString, Colorize};

/// Render the "active tasks by project" listing.
///
/// One block per project in first-seen order, empty groups skipped, and
/// a trailing "Not in project" block for untagged tasks. Each row shows
/// the two-digit task id and the display rendering, colored by
/// priority.
pub fn render_active_by_project(tasks: &TaskList) -> String {
    let mut out = String::new();
    for (project, members) in tasks.active_by_project() {
        if members.is_empty() {
            continue;
        }
        let header = match &project {
            Some(p) => p.trim_start_matches('+'),
            None => "Not in project",
        };
        out.push_str(&format!("{}\n", format!("---  {header}  ---").white()));
        for task in members {
            out.push_str(&format!("{}\n", task_row(task)));
        }
        out.push('\n');
    }
    out
}

fn task_row(task: &Task) -> ColoredString {
    let row = format!(
        "{:02} {}",
        task.id.unwrap_or(0),
        task.rendered_line(&DISPLAY_FIELDS)
    );
    match task.priority {
        Some('A') => row.yellow(),
        Some('B') => row.green(),
        Some('C') => row.blue(),
        Some('D') => row.magenta(),
        _ => row.normal(),
    }
}
