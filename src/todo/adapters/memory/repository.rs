//! In-memory todo repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::todo::{
    domain::{Todo, TodoChanges, TodoDescription, TodoId, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Records are keyed by identifier, with a side index preserving creation
/// order for enumeration. All mutations run under a single write lock, so
/// create/update/delete are atomic with respect to each other and no
/// partial-write state is ever observable.
#[derive(Debug)]
pub struct InMemoryTodoRepository<C = DefaultClock> {
    state: Arc<RwLock<InMemoryTodoState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    records: HashMap<TodoId, Todo>,
    creation_order: Vec<TodoId>,
}

impl InMemoryTodoRepository {
    /// Creates an empty repository reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTodoRepository<C> {
    /// Creates an empty repository reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTodoState::default())),
            clock,
        }
    }
}

impl<C> Clone for InMemoryTodoRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait]
impl<C> TodoRepository for InMemoryTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(
        &self,
        title: TodoTitle,
        description: Option<TodoDescription>,
    ) -> TodoRepositoryResult<Todo> {
        let record = Todo::new(title, description, &*self.clock);
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.creation_order.push(record.id());
        state.records.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.records.get(&id).cloned())
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .creation_order
            .iter()
            .filter_map(|id| state.records.get(id).cloned())
            .collect())
    }

    async fn update(&self, id: TodoId, changes: TodoChanges) -> TodoRepositoryResult<Todo> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let record = state
            .records
            .get_mut(&id)
            .ok_or(TodoRepositoryError::NotFound(id))?;
        record.apply(changes, now);
        Ok(record.clone())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.records.remove(&id).is_none() {
            return Err(TodoRepositoryError::NotFound(id));
        }
        state.creation_order.retain(|existing| *existing != id);
        Ok(())
    }
}

/// Maps a poisoned lock to a storage error.
fn lock_poisoned<T>(err: PoisonError<T>) -> TodoRepositoryError {
    TodoRepositoryError::storage(std::io::Error::other(err.to_string()))
}
