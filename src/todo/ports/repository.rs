//! Repository port for todo persistence and enumeration.

use crate::todo::domain::{Todo, TodoChanges, TodoDescription, TodoId, TodoTitle};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Implementations own the authoritative record collection for the life of
/// the process and hand out independent clones; callers can never mutate
/// stored state through a returned value. Enumeration preserves creation
/// order.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new record with a fresh identifier, `completed` unset, and
    /// equal creation/update timestamps, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Storage`] only on storage-layer
    /// faults; creation itself never fails.
    async fn create(
        &self,
        title: TodoTitle,
        description: Option<TodoDescription>,
    ) -> TodoRepositoryResult<Todo>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist; a missing id is not
    /// an error.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Returns all records in creation order, as a fresh vector per call.
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Applies the supplied fields to an existing record, refreshes its
    /// update timestamp, and returns the full updated record. Identifier
    /// and creation timestamp are immutable.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn update(&self, id: TodoId, changes: TodoChanges) -> TodoRepositoryResult<Todo>;

    /// Removes a record permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The record was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
