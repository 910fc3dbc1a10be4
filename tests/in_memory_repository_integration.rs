//! Behavioural integration tests for [`InMemoryTodoRepository`].
//!
//! These tests exercise the in-memory repository through realistic flows,
//! verifying the identity, ordering, and versioning semantics of the
//! store contract.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use chrono::{DateTime, Local, TimeZone, Utc};
use jotter::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{TodoChanges, TodoDescription, TodoId, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn title(text: &str) -> TodoTitle {
    TodoTitle::new(text).expect("valid title")
}

fn description(text: &str) -> TodoDescription {
    TodoDescription::new(text).expect("valid description")
}

/// Clock frozen at a fixed instant, for deterministic timestamps.
#[derive(Debug)]
struct FrozenClock(DateTime<Utc>);

impl FrozenClock {
    fn at_epoch_secs(secs: i64) -> Self {
        Self(
            Utc.timestamp_opt(secs, 0)
                .single()
                .expect("valid timestamp"),
        )
    }
}

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[test]
fn create_assigns_identity_and_timestamps() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();

    let record = rt
        .block_on(repo.create(title("Test"), Some(description("Details"))))
        .expect("create should succeed");

    assert_eq!(record.title(), "Test");
    assert_eq!(record.description(), Some("Details"));
    assert!(!record.completed());
    assert_eq!(record.created_at(), record.updated_at());

    let other = rt
        .block_on(repo.create(title("Test"), None))
        .expect("create should succeed");
    assert_ne!(other.id(), record.id(), "identifiers must be unique");
}

#[test]
fn find_by_id_returns_the_stored_record_or_none() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();

    let created = rt
        .block_on(repo.create(title("Test"), None))
        .expect("create should succeed");

    let found = rt
        .block_on(repo.find_by_id(created.id()))
        .expect("lookup should succeed");
    assert_eq!(found, Some(created));

    let missing = rt
        .block_on(repo.find_by_id(TodoId::new()))
        .expect("lookup should succeed");
    assert_eq!(missing, None);
}

#[test]
fn find_all_preserves_creation_order_and_is_idempotent() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();

    for name in ["First", "Second", "Third"] {
        rt.block_on(repo.create(title(name), None))
            .expect("create should succeed");
    }

    let first_pass = rt.block_on(repo.find_all()).expect("list should succeed");
    let second_pass = rt.block_on(repo.find_all()).expect("list should succeed");

    let names: Vec<&str> = first_pass.iter().map(|record| record.title()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn update_applies_partial_fields_and_advances_the_version() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();

    let created = rt
        .block_on(repo.create(title("Original"), Some(description("Keep me"))))
        .expect("create should succeed");

    let updated = rt
        .block_on(repo.update(created.id(), TodoChanges::new().with_title("  Renamed  ")))
        .expect("update should succeed");

    assert_eq!(updated.title(), "Renamed", "supplied title is trimmed");
    assert_eq!(updated.description(), Some("Keep me"));
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() > created.updated_at());

    let fetched = rt
        .block_on(repo.find_by_id(created.id()))
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(updated));
}

#[test]
fn update_unknown_id_is_not_found() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();
    let id = TodoId::new();

    let result = rt.block_on(repo.update(id, TodoChanges::new().with_completed(true)));

    assert!(matches!(
        result,
        Err(TodoRepositoryError::NotFound(missing)) if missing == id
    ));
}

#[test]
fn delete_removes_only_the_target() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();

    let first = rt
        .block_on(repo.create(title("First"), None))
        .expect("create should succeed");
    let second = rt
        .block_on(repo.create(title("Second"), None))
        .expect("create should succeed");
    let third = rt
        .block_on(repo.create(title("Third"), None))
        .expect("create should succeed");

    rt.block_on(repo.delete(second.id()))
        .expect("delete should succeed");

    let remaining = rt.block_on(repo.find_all()).expect("list should succeed");
    assert_eq!(remaining, [first, third], "other records are untouched");

    let gone = rt
        .block_on(repo.find_by_id(second.id()))
        .expect("lookup should succeed");
    assert_eq!(gone, None);
}

#[test]
fn delete_unknown_id_is_not_found() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();

    let result = rt.block_on(repo.delete(TodoId::new()));

    assert!(matches!(result, Err(TodoRepositoryError::NotFound(_))));
}

/// Even with a clock that never moves, every update lands strictly after
/// the previous one.
#[test]
fn updates_stay_strictly_monotonic_under_a_frozen_clock() {
    let rt = test_runtime();
    let frozen = FrozenClock::at_epoch_secs(1_700_000_000);
    let instant = frozen.utc();
    let repo = InMemoryTodoRepository::with_clock(Arc::new(frozen));

    let created = rt
        .block_on(repo.create(title("Test"), None))
        .expect("create should succeed");
    assert_eq!(created.created_at(), instant);

    let once = rt
        .block_on(repo.update(created.id(), TodoChanges::new().with_completed(true)))
        .expect("update should succeed");
    let twice = rt
        .block_on(repo.update(created.id(), TodoChanges::new().with_completed(false)))
        .expect("update should succeed");

    assert!(once.updated_at() > created.updated_at());
    assert!(twice.updated_at() > once.updated_at());
    assert_eq!(twice.created_at(), instant);
}
