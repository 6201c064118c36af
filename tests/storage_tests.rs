// Storage tests: whole-file load/save against a temporary directory.

use std::fs;
use tempfile::TempDir;
use todotxt::{Storage, TaskList};

#[test]
fn missing_file_loads_an_empty_list() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("todo.txt"));
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("todo.txt"));

    let mut tasks = storage.load().unwrap();
    tasks.add("(A) Call Mom +Family");
    tasks.add("b Buy milk +Errands");
    storage.save(&tasks).unwrap();

    let reloaded = storage.load().unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.tasks()[0].priority, Some('A'));
    assert_eq!(reloaded.tasks()[1].priority, Some('B'));
    assert_eq!(reloaded.tasks()[1].body, "Buy milk");
}

#[test]
fn blank_lines_are_skipped_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todo.txt");
    fs::write(&path, "one\n\n   \ntwo\n").unwrap();

    let tasks = Storage::new(&path).load().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks.tasks()[1].body, "two");
}

#[test]
fn completion_survives_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("todo.txt"));

    let mut tasks = TaskList::from_lines(["(B) Pay rent"]);
    tasks.complete(0).unwrap();
    storage.save(&tasks).unwrap();

    let reloaded = storage.load().unwrap();
    assert!(reloaded.tasks()[0].completed);
    assert_eq!(reloaded.tasks()[0].priority, None);
}

#[test]
fn save_preserves_user_authored_field_order() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("todo.txt"));

    let tasks = TaskList::from_lines(["Call due:2024-03-01 Mom +Family"]);
    storage.save(&tasks).unwrap();

    let content = fs::read_to_string(dir.path().join("todo.txt")).unwrap();
    assert_eq!(content, "Call due:2024-03-01 Mom +Family\n");
}
