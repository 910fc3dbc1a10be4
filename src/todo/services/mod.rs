//! Application services for todo management.

mod todos;

pub use todos::{
    CreateTodoRequest, TodoFilter, TodoService, TodoServiceError, TodoServiceResult,
    UpdateTodoRequest,
};
