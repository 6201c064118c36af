// Task list tests: id assignment, the add shorthand, error taxonomy,
// and the grouped active-task view.

use todotxt::{TaskList, TodoError};

#[test]
fn from_lines_assigns_positional_ids() {
    let tasks = TaskList::from_lines(["first", "second"]);
    assert_eq!(tasks.tasks()[0].id, Some(0));
    assert_eq!(tasks.tasks()[1].id, Some(1));
}

#[test]
fn add_assigns_the_next_id() {
    let mut tasks = TaskList::new();
    tasks.add("first");
    let task = tasks.add("second");
    assert_eq!(task.id, Some(1));
    assert_eq!(tasks.len(), 2);
}

#[test]
fn add_promotes_single_letter_priority_shorthand() {
    let mut tasks = TaskList::from_lines(["one", "two"]);
    let task = tasks.add("b Buy milk +Errands");
    assert_eq!(task.id, Some(2));
    assert_eq!(task.priority, Some('B'));
    assert_eq!(task.body, "Buy milk");
    assert_eq!(task.projects, vec!["+Errands"]);
}

#[test]
fn add_leaves_longer_first_tokens_alone() {
    let mut tasks = TaskList::new();
    let task = tasks.add("by the way");
    assert_eq!(task.priority, None);
    assert_eq!(task.body, "by the way");
}

#[test]
fn add_leaves_non_letter_shorthand_alone() {
    let mut tasks = TaskList::new();
    let task = tasks.add("1 thing to do");
    assert_eq!(task.priority, None);
    assert_eq!(task.body, "1 thing to do");
}

#[test]
fn complete_unknown_id_fails() {
    let mut tasks = TaskList::from_lines(["one"]);
    assert_eq!(tasks.complete(5).unwrap_err(), TodoError::TaskNotFound(5));
    // Nothing was mutated on the failing path.
    assert!(!tasks.tasks()[0].completed);
}

#[test]
fn complete_marks_the_task_in_place() {
    let mut tasks = TaskList::from_lines(["(B) one +p", "two"]);
    tasks.complete(0).unwrap();
    let task = &tasks.tasks()[0];
    assert!(task.completed);
    assert_eq!(task.priority, None);
    assert!(task.completed_date.is_some());
}

#[test]
fn set_priority_validates_id_then_token() {
    let mut tasks = TaskList::from_lines(["one"]);
    assert_eq!(
        tasks.set_priority(3, "a").unwrap_err(),
        TodoError::TaskNotFound(3)
    );
    assert_eq!(
        tasks.set_priority(0, "abc").unwrap_err(),
        TodoError::InvalidPriority("abc".into())
    );
    assert_eq!(
        tasks.set_priority(0, "1").unwrap_err(),
        TodoError::InvalidPriority("1".into())
    );

    let task = tasks.set_priority(0, "c").unwrap();
    assert_eq!(task.priority, Some('C'));
    assert_eq!(task.raw, "(C) one");
}

#[test]
fn projects_are_distinct_in_first_seen_order() {
    let tasks = TaskList::from_lines(["a +X +Y", "b +Y +Z", "c +X"]);
    assert_eq!(tasks.projects(), vec!["+X", "+Y", "+Z"]);
}

#[test]
fn active_by_project_orders_prioritized_tasks_first() {
    let tasks = TaskList::from_lines(["(A) one +X", "two +X", "(B) three +X"]);
    let groups = tasks.active_by_project();
    let (project, members) = &groups[0];
    assert_eq!(project.as_deref(), Some("+X"));
    let bodies: Vec<&str> = members.iter().map(|t| t.body.as_str()).collect();
    assert_eq!(bodies, vec!["one", "three", "two"]);
}

#[test]
fn active_by_project_is_stable_for_ties() {
    let tasks = TaskList::from_lines(["(A) first +X", "(A) second +X", "plain1 +X", "plain2 +X"]);
    let groups = tasks.active_by_project();
    let bodies: Vec<&str> = groups[0].1.iter().map(|t| t.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "plain1", "plain2"]);
}

#[test]
fn completed_tasks_are_excluded_from_active_groups() {
    let tasks = TaskList::from_lines(["x 2024-01-01 done +X", "live +X"]);
    let (_, members) = &tasks.active_by_project()[0];
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].body, "live");
}

#[test]
fn tasks_without_projects_group_under_none() {
    let tasks = TaskList::from_lines(["solo @home", "tagged +X"]);
    let groups = tasks.active_by_project();
    let (project, members) = groups.last().unwrap();
    assert!(project.is_none());
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].body, "solo");
}

#[test]
fn multi_project_tasks_appear_in_each_group() {
    let tasks = TaskList::from_lines(["both +X +Y"]);
    let groups = tasks.active_by_project();
    assert_eq!(groups[0].0.as_deref(), Some("+X"));
    assert_eq!(groups[0].1.len(), 1);
    assert_eq!(groups[1].0.as_deref(), Some("+Y"));
    assert_eq!(groups[1].1.len(), 1);
}

#[test]
fn to_lines_preserves_raw_text() {
    let tasks = TaskList::from_lines(["(A) Call Mom due:2024-03-01 +Family"]);
    assert_eq!(tasks.to_lines(), vec!["(A) Call Mom due:2024-03-01 +Family"]);
}
