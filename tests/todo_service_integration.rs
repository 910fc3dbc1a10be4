//! End-to-end flows through [`TodoService`] backed by the in-memory
//! repository.
//!
//! Unit tests pin individual rules; these scenarios chain the use-cases
//! the way a client would drive them.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use jotter::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::Todo,
    services::{CreateTodoRequest, TodoFilter, TodoService, TodoServiceError, UpdateTodoRequest},
};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn service() -> TodoService<InMemoryTodoRepository> {
    TodoService::new(Arc::new(InMemoryTodoRepository::new()))
}

/// A full working session: capture tasks, search, complete one, hit the
/// frozen-record rule, clear it out, and check what remains.
#[test]
fn complete_task_management_session() {
    let rt = test_runtime();
    let todos = service();

    rt.block_on(todos.create_todo(
        CreateTodoRequest::new("Shopping").with_description("Milk and eggs"),
    ))
    .expect("creation should succeed");
    let coding = rt
        .block_on(todos.create_todo(
            CreateTodoRequest::new("Coding").with_description("Finish the parser"),
        ))
        .expect("creation should succeed");
    rt.block_on(todos.create_todo(CreateTodoRequest::new("Exercise")))
        .expect("creation should succeed");

    // Substring search is case-insensitive and preserves creation order.
    let ing = rt
        .block_on(todos.find_todos(&TodoFilter::new().with_title("ING")))
        .expect("search should succeed");
    let ing_titles: Vec<&str> = ing.iter().map(Todo::title).collect();
    assert_eq!(ing_titles, ["Shopping", "Coding"]);

    // Completing freezes content but not existence.
    rt.block_on(todos.update_todo(coding.id(), UpdateTodoRequest::new().with_completed(true)))
        .expect("completing should succeed");
    let frozen = rt.block_on(
        todos.update_todo(coding.id(), UpdateTodoRequest::new().with_title("Rework")),
    );
    assert!(matches!(
        frozen,
        Err(TodoServiceError::CompletedTodoImmutable)
    ));

    let done = rt
        .block_on(todos.find_todos(&TodoFilter::new().with_completed(true)))
        .expect("search should succeed");
    assert_eq!(done.iter().map(Todo::title).collect::<Vec<_>>(), ["Coding"]);

    rt.block_on(todos.delete_todo(coding.id()))
        .expect("deleting a completed record should succeed");

    let remaining = rt
        .block_on(todos.find_todos(&TodoFilter::new()))
        .expect("listing should succeed");
    let remaining_titles: Vec<&str> = remaining.iter().map(Todo::title).collect();
    assert_eq!(remaining_titles, ["Shopping", "Exercise"]);
}

/// Length limits count the sanitized text, not the raw input.
#[test]
fn sanitization_runs_before_length_validation() {
    let rt = test_runtime();
    let todos = service();

    let wrapped = format!("<b>{}</b>", "a".repeat(100));
    let created = rt
        .block_on(todos.create_todo(CreateTodoRequest::new(wrapped)))
        .expect("sanitized title at the limit should be accepted");

    assert_eq!(created.title().chars().count(), 100);
}

/// Records survive a serialize/deserialize round trip unchanged.
#[test]
fn records_round_trip_through_serialization() {
    let rt = test_runtime();
    let todos = service();

    let created = rt
        .block_on(todos.create_todo(
            CreateTodoRequest::new("Serialize me").with_description("Wire fidelity"),
        ))
        .expect("creation should succeed");

    let payload = serde_json::to_string(&created).expect("serializable record");
    let decoded: Todo = serde_json::from_str(&payload).expect("decodable record");

    assert_eq!(decoded, created);
}

/// Mutations through one service handle are visible through a clone
/// sharing the same repository.
#[test]
fn service_clones_share_the_backing_store() {
    let rt = test_runtime();
    let todos = service();
    let view = todos.clone();

    let created = rt
        .block_on(todos.create_todo(CreateTodoRequest::new("Shared")))
        .expect("creation should succeed");

    let seen = rt
        .block_on(view.get_todo(created.id()))
        .expect("clone should see the record");
    assert_eq!(seen, created);
}
