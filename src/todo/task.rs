//! The task entity: line parsing, derived due state, mutation, and
//! rendering back to a line.
//!
//! Parsing works by ordered pattern removal on a shrinking working
//! string. Each rule strips its match before the next rule runs, so a
//! later pattern can never misread an earlier field's content (the
//! created-date rule, for instance, only sees the text left after the
//! due date was removed). The order is load-bearing:
//! completion, priority, due date, created date, projects, contexts,
//! and whatever remains is the body.

use chrono::NaiveDate;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use super::dates::{local_date_today, resolve_relative_due_on};

static COMPLETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^x\s(\d{4}-\d{2}-\d{2})?").unwrap());
static PRIORITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(([A-Z])\)\s").unwrap());
static DUE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"due:(\d{4}-\d{2}-\d{2})").unwrap());
static BARE_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());
static PROJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+\S+").unwrap());
static CONTEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\S+").unwrap());

/// Due classification of a task relative to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Not completed but the due date is in the future, absent, or not a
    /// real calendar date - or the task is already completed.
    NotDue,
    /// Due exactly today.
    DueToday,
    /// The due date has passed.
    Overdue,
}

/// One slot of a line template passed to [`Task::rendered_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `x` plus the completion date, when the task is completed.
    Completion,
    /// The `(X)` priority token.
    Priority,
    /// The bare `YYYY-MM-DD` creation date.
    CreationDate,
    /// The free-text body.
    Body,
    /// All `+project` tags, space separated.
    Projects,
    /// All `@context` tags, space separated.
    Contexts,
    /// The `due:YYYY-MM-DD` token.
    DueDate,
}

/// Field order that reproduces a full, re-parseable todo.txt line.
pub const CANONICAL_FIELDS: [Field; 7] = [
    Field::Completion,
    Field::Priority,
    Field::CreationDate,
    Field::Body,
    Field::Projects,
    Field::Contexts,
    Field::DueDate,
];

/// Field order for screen listings: dates and the priority token are
/// omitted, the priority classification is exposed separately for
/// coloring.
pub const DISPLAY_FIELDS: [Field; 3] = [Field::Body, Field::Projects, Field::Contexts];

/// One line of the todo.txt list.
///
/// `raw` holds the line text after relative-date substitution but before
/// field extraction, so mutations can rewrite a field's token in place
/// without re-rendering the whole line. Dates are kept as the strings
/// found in the line; a date-shaped but invalid value (say `2024-99-99`)
/// survives losslessly and is only interpreted when the due status is
/// asked for.
#[derive(Debug, Clone)]
pub struct Task {
    /// Position in the owning collection; not persisted in the line.
    pub id: Option<usize>,
    /// The retained line text, kept in sync by mutations.
    pub raw: String,
    pub completed: bool,
    pub completed_date: Option<String>,
    pub creation_date: Option<String>,
    pub due_date: Option<String>,
    /// Single uppercase letter, `A` is the highest priority.
    pub priority: Option<char>,
    /// Free text left after all structured tokens are removed, trimmed.
    pub body: String,
    /// `+project` tags in encounter order, duplicates preserved.
    pub projects: Vec<String>,
    /// `@context` tags in encounter order, duplicates preserved.
    pub contexts: Vec<String>,
}

impl Task {
    /// Parse a raw line, resolving relative due dates against `today`.
    ///
    /// Never fails: absent fields are `None`/empty and anything the
    /// extraction rules leave behind becomes body text.
    pub fn parse_on(id: Option<usize>, line: &str, today: NaiveDate) -> Self {
        // Force single-line before any pattern can match across a break.
        let line: String = line.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let raw = resolve_relative_due_on(&line, today);

        let mut rest = raw.clone();

        let mut completed = false;
        let mut completed_date = None;
        if let Some(caps) = COMPLETED.captures(&rest) {
            completed = true;
            completed_date = caps.get(1).map(|d| d.as_str().to_string());
            rest = COMPLETED.replace(&rest, "").into_owned();
        }

        let mut priority = None;
        if let Some(caps) = PRIORITY.captures(&rest) {
            priority = caps[1].chars().next();
            rest = PRIORITY.replace(&rest, "").into_owned();
        }

        let mut due_date = None;
        if let Some(caps) = DUE_DATE.captures(&rest) {
            due_date = Some(caps[1].to_string());
            rest = DUE_DATE.replace(&rest, "").into_owned();
        }

        // Only matches after the due date is gone, so a bare date here is
        // the creation date.
        let mut creation_date = None;
        if let Some(date) = BARE_DATE.find(&rest) {
            creation_date = Some(date.as_str().to_string());
            rest = BARE_DATE.replace(&rest, "").into_owned();
        }

        let projects: Vec<String> = PROJECT
            .find_iter(&rest)
            .map(|m| m.as_str().to_string())
            .collect();
        rest = PROJECT.replace_all(&rest, "").into_owned();

        let contexts: Vec<String> = CONTEXT
            .find_iter(&rest)
            .map(|m| m.as_str().to_string())
            .collect();
        rest = CONTEXT.replace_all(&rest, "").into_owned();

        let body = rest.trim().to_string();

        Self {
            id,
            raw,
            completed,
            completed_date,
            creation_date,
            due_date,
            priority,
            body,
            projects,
            contexts,
        }
    }

    /// Parse a raw line against the local calendar date.
    pub fn parse(id: Option<usize>, line: &str) -> Self {
        Self::parse_on(id, line, local_date_today())
    }

    /// The textual `(X)` form of the current priority, if any.
    pub fn priority_token(&self) -> Option<String> {
        self.priority.map(|p| format!("({p})"))
    }

    /// Classify the task's due date against `today`.
    pub fn due_status_on(&self, today: NaiveDate) -> DueStatus {
        if self.completed {
            return DueStatus::NotDue;
        }
        let Some(due) = self
            .due_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        else {
            return DueStatus::NotDue;
        };
        if due < today {
            DueStatus::Overdue
        } else if due == today {
            DueStatus::DueToday
        } else {
            DueStatus::NotDue
        }
    }

    /// Classify against the local calendar date. "Today" is the
    /// machine's local date; no explicit time zone handling.
    pub fn due_status(&self) -> DueStatus {
        self.due_status_on(local_date_today())
    }

    /// Set or clear the priority, keeping `raw` in step.
    ///
    /// An alphabetic `letter` becomes an uppercase `(X)` token that
    /// replaces the existing token inside `raw`, or is prepended when the
    /// task had none. Anything else clears the priority. An empty `raw`
    /// gives the rewrite nothing to anchor to and is left alone; the
    /// structured field still updates.
    pub fn set_priority(&mut self, letter: char) {
        let new = letter
            .is_ascii_alphabetic()
            .then(|| letter.to_ascii_uppercase());
        let new_token = new.map(|p| format!("({p})")).unwrap_or_default();

        if !self.raw.is_empty() {
            self.raw = match self.priority_token() {
                Some(old) => self.raw.replace(&old, &new_token),
                None => format!("{new_token} {}", self.raw),
            };
            self.raw = self.raw.trim().to_string();
        }
        self.priority = new;
    }

    /// Raise the priority one letter (toward `A`).
    pub fn increase_priority(&mut self) {
        self.shift_priority(-1);
    }

    /// Lower the priority one letter (toward `Z`).
    pub fn decrease_priority(&mut self) {
        self.shift_priority(1);
    }

    // A is the highest priority, so increasing shifts the letter
    // backward in the alphabet. Shifts that leave A-Z are no-ops; an
    // unset priority becomes A in either direction.
    fn shift_priority(&mut self, shift: i8) {
        match self.priority {
            None => self.set_priority('A'),
            Some(current) => {
                let shifted = (current as u8).wrapping_add_signed(shift);
                if shifted.is_ascii_uppercase() {
                    self.set_priority(shifted as char);
                }
            }
        }
    }

    /// Mark the task done: stamps today's date, drops the priority, and
    /// prefixes `raw` with the completion marker. Already-completed
    /// tasks are left untouched.
    pub fn complete(&mut self) {
        self.complete_on(local_date_today());
    }

    /// [`Task::complete`] anchored to an explicit date.
    pub fn complete_on(&mut self, today: NaiveDate) {
        if self.completed {
            return;
        }
        if let Some(old) = self.priority_token() {
            self.raw = self.raw.replace(&old, "").trim().to_string();
            self.priority = None;
        }
        let date = today.format("%Y-%m-%d").to_string();
        self.raw = format!("x {date} {}", self.raw).trim_end().to_string();
        self.completed = true;
        self.completed_date = Some(date);
    }

    /// Reopen a completed task, stripping the completion marker from
    /// `raw`.
    pub fn uncomplete(&mut self) {
        if !self.completed {
            return;
        }
        self.completed = false;
        self.completed_date = None;
        self.raw = COMPLETED.replace(&self.raw, "").trim_start().to_string();
    }

    /// Render the structured fields back into a line.
    ///
    /// `fields` gives the slot order. Empty slots render nothing and the
    /// remaining pieces are joined with single spaces, so serialization
    /// normalizes whitespace. [`CANONICAL_FIELDS`] produces a line that
    /// re-parses to identical structured fields; [`DISPLAY_FIELDS`] is
    /// the listing form.
    pub fn rendered_line(&self, fields: &[Field]) -> String {
        let parts: Vec<String> = fields
            .iter()
            .map(|field| match field {
                Field::Completion => {
                    if self.completed {
                        match &self.completed_date {
                            Some(date) => format!("x {date}"),
                            None => "x".to_string(),
                        }
                    } else {
                        String::new()
                    }
                }
                Field::Priority => self.priority_token().unwrap_or_default(),
                Field::CreationDate => self.creation_date.clone().unwrap_or_default(),
                Field::Body => self.body.clone(),
                Field::Projects => self.projects.join(" "),
                Field::Contexts => self.contexts.join(" "),
                Field::DueDate => self
                    .due_date
                    .as_ref()
                    .map(|d| format!("due:{d}"))
                    .unwrap_or_default(),
            })
            .filter(|part| !part.is_empty())
            .collect();
        parts.join(" ")
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered_line(&CANONICAL_FIELDS))
    }
}

// Tasks compare by raw line text. This is only a fallback ordering; the
// listing sorts by priority instead.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Task {}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}
