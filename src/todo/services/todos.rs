//! Use-case service for todo management.

use crate::todo::{
    domain::{Todo, TodoChanges, TodoDescription, TodoDomainError, TodoId, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    title: String,
    description: Option<String>,
}

impl CreateTodoRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial-update payload for an existing todo.
///
/// Only supplied fields are validated and applied; omitted fields keep
/// their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Creates an empty update request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            completed: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Record filter for todo searches.
///
/// Each supplied field is an independent predicate; a record matches when
/// every supplied predicate holds. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}

impl TodoFilter {
    /// Creates a filter that matches every record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            completed: None,
        }
    }

    /// Keeps records whose title contains `needle`, case-insensitively.
    #[must_use]
    pub fn with_title(mut self, needle: impl Into<String>) -> Self {
        self.title = Some(needle.into());
        self
    }

    /// Keeps records whose description contains `needle`,
    /// case-insensitively. Records without a description never match.
    #[must_use]
    pub fn with_description(mut self, needle: impl Into<String>) -> Self {
        self.description = Some(needle.into());
        self
    }

    /// Keeps records whose completion flag equals `completed` exactly.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Reports whether `record` satisfies every supplied predicate.
    #[must_use]
    pub fn matches(&self, record: &Todo) -> bool {
        self.title_matches(record) && self.description_matches(record) && self.completed_matches(record)
    }

    fn title_matches(&self, record: &Todo) -> bool {
        self.title
            .as_deref()
            .is_none_or(|needle| contains_ignore_case(record.title(), needle))
    }

    fn description_matches(&self, record: &Todo) -> bool {
        self.description.as_deref().is_none_or(|needle| {
            record
                .description()
                .is_some_and(|text| contains_ignore_case(text, needle))
        })
    }

    fn completed_matches(&self, record: &Todo) -> bool {
        self.completed
            .is_none_or(|expected| record.completed() == expected)
    }
}

/// Case-insensitive substring match.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Input failed sanitization-time validation.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),

    /// The referenced todo does not exist.
    #[error("Todo not found")]
    NotFound,

    /// The referenced todo is completed and its content is frozen.
    #[error("Cannot update completed todo")]
    CompletedTodoImmutable,

    /// The repository failed in a way the caller cannot recover from.
    #[error(transparent)]
    Repository(TodoRepositoryError),
}

impl From<TodoRepositoryError> for TodoServiceError {
    fn from(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::NotFound(_) => Self::NotFound,
            storage @ TodoRepositoryError::Storage(_) => Self::Repository(storage),
        }
    }
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo use-case service.
///
/// Layers input sanitization, length validation, and business rules over a
/// [`TodoRepository`]. The boundary adapter consumes exactly this surface.
#[derive(Debug)]
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TodoService<R>
where
    R: TodoRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a todo from sanitized, validated input.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when the title is empty
    /// after sanitization or either text field exceeds its length limit,
    /// and [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create_todo(&self, request: CreateTodoRequest) -> TodoServiceResult<Todo> {
        let CreateTodoRequest {
            title: raw_title,
            description: raw_description,
        } = request;
        let title = TodoTitle::new(raw_title)?;
        let description = raw_description.map(TodoDescription::new).transpose()?;
        Ok(self.repository.create(title, description).await?)
    }

    /// Retrieves a single todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record carries `id`.
    pub async fn get_todo(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound)
    }

    /// Updates the supplied fields of an existing todo.
    ///
    /// A completed todo is frozen: the check runs before any field
    /// validation, whatever fields the caller supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record carries `id`,
    /// [`TodoServiceError::CompletedTodoImmutable`] when the record is
    /// completed, and [`TodoServiceError::Validation`] when a supplied
    /// field fails the same checks as creation.
    pub async fn update_todo(
        &self,
        id: TodoId,
        request: UpdateTodoRequest,
    ) -> TodoServiceResult<Todo> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound)?;
        if existing.completed() {
            return Err(TodoServiceError::CompletedTodoImmutable);
        }

        let UpdateTodoRequest {
            title: raw_title,
            description: raw_description,
            completed,
        } = request;
        let mut changes = TodoChanges::new();
        if let Some(value) = raw_title {
            changes = changes.with_title(TodoTitle::new(value)?.into_inner());
        }
        if let Some(value) = raw_description {
            changes = changes.with_description(TodoDescription::new(value)?.into_inner());
        }
        if let Some(value) = completed {
            changes = changes.with_completed(value);
        }
        Ok(self.repository.update(id, changes).await?)
    }

    /// Returns todos matching every supplied filter field, in creation
    /// order. The full match set is returned; there is no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when enumeration fails.
    pub async fn find_todos(&self, filter: &TodoFilter) -> TodoServiceResult<Vec<Todo>> {
        let mut records = self.repository.find_all().await?;
        records.retain(|record| filter.matches(record));
        Ok(records)
    }

    /// Deletes a todo permanently.
    ///
    /// Completed todos may be deleted even though they can no longer be
    /// updated.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record carries `id`.
    pub async fn delete_todo(&self, id: TodoId) -> TodoServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
