//! Codec and collection properties.
//!
//! Example-based checks for the file format, plus proptest properties:
//! 1. After any sequence of adds and removes, ids are exactly 1..=N.
//! 2. Any comma-free collection survives encode → decode with names,
//!    descriptions and due dates intact; completion flags are dropped.
//! 3. Arbitrary text never makes `parse_tasks` panic.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use taskman::model::task::{Filter, Task, TaskCollection};
use taskman::parse::{DecodeError, FormatIssue, parse_tasks, serialize_tasks};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(tasks: &TaskCollection) -> Vec<usize> {
    tasks.iter().map(|t| t.id).collect()
}

fn fields(tasks: &TaskCollection) -> Vec<(String, String, NaiveDate)> {
    tasks
        .iter()
        .map(|t| (t.name.clone(), t.description.clone(), t.due_date))
        .collect()
}

// ============================================================================
// File format examples
// ============================================================================

#[test]
fn encode_single_task() {
    let mut tasks = TaskCollection::new();
    tasks.add(Task::new("Task 1", "Description 1", date(2026, 3, 6)));
    assert_eq!(serialize_tasks(&tasks), "Task 1,Description 1,2026-03-06\n");
}

#[test]
fn decode_empty_input() {
    assert!(matches!(parse_tasks(""), Err(DecodeError::EmptyInput)));
}

#[test]
fn decode_two_fields() {
    match parse_tasks("Task 1,Description 1\n") {
        Err(DecodeError::Format { line, reason, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(reason, FormatIssue::FieldCount(2));
        }
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn decode_non_iso_date() {
    match parse_tasks("Task 1,Description 1,03-32-2026\n") {
        Err(DecodeError::Format { reason, .. }) => {
            assert_eq!(reason, FormatIssue::InvalidDate);
        }
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn decode_assigns_ids_in_file_order() {
    let tasks = parse_tasks("b,,2026-02-01\na,x,2026-01-01\n").unwrap();
    assert_eq!(ids(&tasks), vec![1, 2]);
    assert_eq!(tasks.all()[1].name, "a");
    assert!(tasks.iter().all(|t| !t.completed));
}

#[test]
fn remove_from_two_leaves_id_one() {
    for victim in 0..2 {
        let mut tasks = TaskCollection::new();
        let a = tasks.add(Task::new("a", "", date(2026, 1, 1)));
        let b = tasks.add(Task::new("b", "", date(2026, 1, 2)));
        let key = if victim == 0 { a } else { b };
        tasks.remove(key).unwrap();
        assert_eq!(ids(&tasks), vec![1]);
    }
}

#[test]
fn copy_is_independent() {
    let mut original = TaskCollection::new();
    let key = original.add(Task::new("a", "", date(2026, 1, 1)));
    let mut copy = original.copy();
    assert_eq!(copy, original);

    copy.set_completed(key, true);
    copy.add(Task::new("b", "", date(2026, 1, 2)));
    assert!(!original.get(key).unwrap().completed);
    assert_eq!(original.len(), 1);

    original.clear();
    assert_eq!(copy.len(), 2);
}

#[test]
fn sort_is_stable_and_idempotent() {
    let mut tasks = TaskCollection::new();
    tasks.add(Task::new("x", "first", date(2026, 5, 1)));
    tasks.add(Task::new("y", "", date(2026, 1, 1)));
    tasks.add(Task::new("x", "second", date(2026, 3, 1)));

    tasks.sort_by_name();
    let descs: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs, vec!["first", "second", ""]);
    assert_eq!(ids(&tasks), vec![1, 2, 3]);

    let once = tasks.copy();
    tasks.sort_by_name();
    assert_eq!(tasks, once);

    tasks.sort_by_due_date();
    let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["y", "x", "x"]);
    assert_eq!(ids(&tasks), vec![1, 2, 3]);
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(usize),
    Complete(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Op::Add),
        any::<usize>().prop_map(Op::Remove),
        any::<usize>().prop_map(Op::Complete),
    ]
}

/// Strategy for a valid due date (day capped at 28 so every month works).
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
}

/// Strategy for a comma-free task that the codec can store.
fn arb_task() -> impl Strategy<Value = (String, String, NaiveDate, bool)> {
    (
        "[A-Za-z0-9 .!?-]{1,49}",
        "[A-Za-z0-9 .!?%-]{0,49}",
        arb_date(),
        any::<bool>(),
    )
}

proptest! {
    #[test]
    fn ids_stay_dense(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut tasks = TaskCollection::new();
        for op in ops {
            match op {
                Op::Add(name) => {
                    tasks.add(Task::new(name, "", date(2026, 1, 1)));
                }
                Op::Remove(i) if !tasks.is_empty() => {
                    let key = tasks.all()[i % tasks.len()].key().unwrap();
                    prop_assert!(tasks.remove(key).is_some());
                }
                Op::Complete(i) if !tasks.is_empty() => {
                    let key = tasks.all()[i % tasks.len()].key().unwrap();
                    prop_assert!(tasks.set_completed(key, true));
                }
                _ => {}
            }
            let expected: Vec<usize> = (1..=tasks.len()).collect();
            prop_assert_eq!(ids(&tasks), expected);
        }
    }

    #[test]
    fn views_partition_all(entries in prop::collection::vec(arb_task(), 0..16)) {
        let mut tasks = TaskCollection::new();
        for (name, desc, due, completed) in entries {
            let key = tasks.add(Task::new(name, desc, due));
            tasks.set_completed(key, completed);
        }
        let done = tasks.view(Filter::Completed);
        let open = tasks.view(Filter::Incomplete);
        prop_assert_eq!(done.len() + open.len(), tasks.len());
        prop_assert!(done.iter().all(|t| t.completed));
        prop_assert!(open.iter().all(|t| !t.completed));
    }

    #[test]
    fn encode_decode_round_trip(entries in prop::collection::vec(arb_task(), 1..16)) {
        let mut tasks = TaskCollection::new();
        for (name, desc, due, completed) in entries {
            let key = tasks.add(Task::new(name, desc, due));
            tasks.set_completed(key, completed);
        }

        let decoded = parse_tasks(&serialize_tasks(&tasks)).unwrap();
        prop_assert_eq!(fields(&decoded), fields(&tasks));
        prop_assert_eq!(ids(&decoded), ids(&tasks));
        prop_assert!(decoded.iter().all(|t| !t.completed));
    }

    #[test]
    fn decode_never_panics(source in "\\PC{0,200}") {
        let _ = parse_tasks(&source);
    }
}
