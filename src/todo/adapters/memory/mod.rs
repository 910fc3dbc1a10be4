//! In-memory adapter for todo persistence.

mod repository;

pub use repository::InMemoryTodoRepository;
