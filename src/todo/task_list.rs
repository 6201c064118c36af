//! The ordered task collection and its queries.

use chrono::NaiveDate;

use super::dates::local_date_today;
use super::task::Task;
use crate::error::{Result, TodoError};

/// An ordered list of tasks, indexed by the ids handed out at insertion.
///
/// Ids are positions in the underlying vector: assigned when a line is
/// loaded or a task is added, never persisted inside the line text. The
/// list is loaded from the backing file once at startup, mutated in
/// place, and written back wholesale after every mutating command.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from raw lines; ids follow line position.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_on(lines, local_date_today())
    }

    /// [`TaskList::from_lines`] anchored to an explicit date, for
    /// deterministic relative-date handling.
    pub fn from_lines_on<I, S>(lines: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tasks = lines
            .into_iter()
            .enumerate()
            .map(|(id, line)| Task::parse_on(Some(id), line.as_ref(), today))
            .collect();
        Self { tasks }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: usize) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Parse `text` as a new task and append it.
    ///
    /// A leading token of exactly one letter is shorthand for a
    /// priority: `"b Buy milk"` becomes `"(B) Buy milk"` before parsing.
    pub fn add(&mut self, text: &str) -> &Task {
        let text = promote_priority_shorthand(text);
        let id = self.tasks.len();
        self.tasks.push(Task::parse(Some(id), &text));
        &self.tasks[id]
    }

    /// Mark task `id` completed. Persisting the change is the caller's
    /// responsibility.
    pub fn complete(&mut self, id: usize) -> Result<&Task> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or(TodoError::TaskNotFound(id))?;
        task.complete();
        Ok(task)
    }

    /// Set the priority of task `id` from a one-letter token.
    pub fn set_priority(&mut self, id: usize, priority: &str) -> Result<&Task> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or(TodoError::TaskNotFound(id))?;
        let letter = parse_priority_token(priority)?;
        task.set_priority(letter);
        Ok(task)
    }

    /// Distinct `+project` tags across all tasks, first-seen order.
    pub fn projects(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for task in &self.tasks {
            for project in &task.projects {
                if !seen.contains(project) {
                    seen.push(project.clone());
                }
            }
        }
        seen
    }

    /// Non-completed tasks grouped per project, prioritized tasks first.
    ///
    /// Groups appear in first-seen project order, followed by a final
    /// `None` group for tasks carrying no project at all. Within a group
    /// the sort is stable: tasks with a priority come before those
    /// without, ordered `A` before `B`, and ties keep insertion order. A
    /// task tagged with several projects appears in each of its groups.
    pub fn active_by_project(&self) -> Vec<(Option<String>, Vec<&Task>)> {
        let active: Vec<&Task> = self.tasks.iter().filter(|t| !t.completed).collect();

        let mut groups = Vec::new();
        for project in self.projects() {
            let mut members: Vec<&Task> = active
                .iter()
                .copied()
                .filter(|t| t.projects.contains(&project))
                .collect();
            sort_by_priority(&mut members);
            groups.push((Some(project), members));
        }

        let mut rest: Vec<&Task> = active
            .iter()
            .copied()
            .filter(|t| t.projects.is_empty())
            .collect();
        sort_by_priority(&mut rest);
        groups.push((None, rest));
        groups
    }

    /// The retained raw line of every task, in order, for whole-file
    /// persistence. User-authored field order inside a line survives
    /// save and reload verbatim, except where a mutation rewrote a
    /// field's token.
    pub fn to_lines(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.raw.clone()).collect()
    }
}

fn sort_by_priority(tasks: &mut [&Task]) {
    tasks.sort_by_key(|t| (t.priority.is_none(), t.priority));
}

fn parse_priority_token(token: &str) -> Result<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(TodoError::InvalidPriority(token.to_string())),
    }
}

fn promote_priority_shorthand(text: &str) -> String {
    let mut parts = text.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or_default();
    let single_letter = first.len() == 1 && first.chars().all(|c| c.is_ascii_alphabetic());
    if !single_letter {
        return text.to_string();
    }
    let letter = first.to_ascii_uppercase();
    match parts.next() {
        Some(rest) => format!("({letter}) {rest}"),
        None => format!("({letter})"),
    }
}
