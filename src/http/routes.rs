//! Route dispatch and outcome mapping for the todo HTTP boundary.
//!
//! The boundary publishes a fixed outcome table: service validation
//! failures and business-rule violations map to 400, missing records to
//! 404, and anything unexpected to an opaque 500. Request-shape checks
//! (required title field, boolean `completed` query value) live here,
//! not in the core.

use crate::todo::{
    domain::TodoId,
    ports::TodoRepository,
    services::{CreateTodoRequest, TodoFilter, TodoService, TodoServiceError, UpdateTodoRequest},
};
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Method, Response, StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// JSON body accepted by `POST /todos`.
#[derive(Debug, Default, Deserialize)]
struct CreateTodoBody {
    title: Option<String>,
    description: Option<String>,
}

/// JSON body accepted by `PUT /todos/{id}`.
#[derive(Debug, Default, Deserialize)]
struct UpdateTodoBody {
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}

/// Query parameters accepted by `GET /todos`.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    search: Option<String>,
    completed: Option<String>,
}

/// Addressable targets under the todo route tree.
enum RouteTarget<'a> {
    /// `/todos`
    Collection,
    /// `/todos/{id}` with the raw, unparsed id segment.
    Item(&'a str),
}

/// Dispatches one request to the matching service call and maps the
/// outcome to a response.
pub(crate) async fn dispatch<R>(
    service: &TodoService<R>,
    method: &Method,
    path: &str,
    query: Option<&str>,
    body: &[u8],
) -> Response<Full<Bytes>>
where
    R: TodoRepository,
{
    match route_target(path) {
        Some(RouteTarget::Collection) if *method == Method::POST => create(service, body).await,
        Some(RouteTarget::Collection) if *method == Method::GET => list(service, query).await,
        Some(RouteTarget::Item(raw_id)) if *method == Method::GET => fetch(service, raw_id).await,
        Some(RouteTarget::Item(raw_id)) if *method == Method::PUT => {
            update(service, raw_id, body).await
        }
        Some(RouteTarget::Item(raw_id)) if *method == Method::DELETE => {
            remove(service, raw_id).await
        }
        _ => not_found(),
    }
}

/// Resolves a path to a route target, tolerating one trailing slash on the
/// collection.
fn route_target(path: &str) -> Option<RouteTarget<'_>> {
    let rest = path.strip_prefix("/todos")?;
    if rest.is_empty() || rest == "/" {
        return Some(RouteTarget::Collection);
    }
    let id = rest.strip_prefix('/')?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(RouteTarget::Item(id))
}

async fn create<R>(service: &TodoService<R>, body: &[u8]) -> Response<Full<Bytes>>
where
    R: TodoRepository,
{
    let Some(parsed) = parse_body::<CreateTodoBody>(body) else {
        return invalid_body();
    };
    let Some(title) = parsed.title else {
        return errors_response(StatusCode::BAD_REQUEST, "Title is required");
    };
    let mut request = CreateTodoRequest::new(title);
    if let Some(description) = parsed.description {
        request = request.with_description(description);
    }
    match service.create_todo(request).await {
        Ok(record) => json_response(StatusCode::CREATED, &record),
        Err(err) => error_response(&err),
    }
}

async fn list<R>(service: &TodoService<R>, query: Option<&str>) -> Response<Full<Bytes>>
where
    R: TodoRepository,
{
    let parsed: ListQuery = match serde_urlencoded::from_str(query.unwrap_or("")) {
        Ok(parsed) => parsed,
        Err(_) => return errors_response(StatusCode::BAD_REQUEST, "Invalid query string"),
    };
    let mut filter = TodoFilter::new();
    if let Some(search) = parsed.search {
        filter = filter.with_title(search.trim());
    }
    if let Some(raw) = parsed.completed {
        match parse_completed_param(&raw) {
            Some(completed) => filter = filter.with_completed(completed),
            None => {
                return errors_response(
                    StatusCode::BAD_REQUEST,
                    "Completed status must be true or false",
                );
            }
        }
    }
    match service.find_todos(&filter).await {
        Ok(records) => json_response(StatusCode::OK, &records),
        Err(err) => error_response(&err),
    }
}

async fn fetch<R>(service: &TodoService<R>, raw_id: &str) -> Response<Full<Bytes>>
where
    R: TodoRepository,
{
    let Some(id) = parse_id(raw_id) else {
        return todo_not_found();
    };
    match service.get_todo(id).await {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(err) => error_response(&err),
    }
}

async fn update<R>(service: &TodoService<R>, raw_id: &str, body: &[u8]) -> Response<Full<Bytes>>
where
    R: TodoRepository,
{
    let Some(id) = parse_id(raw_id) else {
        return todo_not_found();
    };
    let Some(parsed) = parse_body::<UpdateTodoBody>(body) else {
        return invalid_body();
    };
    let UpdateTodoBody {
        title,
        description,
        completed,
    } = parsed;
    let mut request = UpdateTodoRequest::new();
    if let Some(value) = title {
        request = request.with_title(value);
    }
    if let Some(value) = description {
        request = request.with_description(value);
    }
    if let Some(value) = completed {
        request = request.with_completed(value);
    }
    match service.update_todo(id, request).await {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(err) => error_response(&err),
    }
}

async fn remove<R>(service: &TodoService<R>, raw_id: &str) -> Response<Full<Bytes>>
where
    R: TodoRepository,
{
    let Some(id) = parse_id(raw_id) else {
        return todo_not_found();
    };
    match service.delete_todo(id).await {
        Ok(()) => no_content(),
        Err(err) => error_response(&err),
    }
}

/// Parses a JSON body, treating an empty body as an empty object so a
/// bare `PUT` still refreshes the record.
fn parse_body<T>(body: &[u8]) -> Option<T>
where
    T: Default + DeserializeOwned,
{
    if body.is_empty() {
        return Some(T::default());
    }
    serde_json::from_slice(body).ok()
}

/// A malformed path id is indistinguishable from a never-issued one.
fn parse_id(raw_id: &str) -> Option<TodoId> {
    raw_id.parse().ok()
}

/// Accepts `true`/`false` in any casing; anything else is a caller error.
fn parse_completed_param(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Maps a service error to the published outcome table.
fn error_response(err: &TodoServiceError) -> Response<Full<Bytes>> {
    match err {
        TodoServiceError::Validation(_) | TodoServiceError::CompletedTodoImmutable => {
            errors_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        TodoServiceError::NotFound => errors_response(StatusCode::NOT_FOUND, &err.to_string()),
        TodoServiceError::Repository(source) => {
            tracing::error!(error = %source, "todo operation failed");
            errors_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Builds the `{"errors": [message]}` body every failure shares.
fn errors_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_payload(status, serde_json::json!({ "errors": [message] }).to_string())
}

fn json_response<T>(status: StatusCode, value: &T) -> Response<Full<Bytes>>
where
    T: serde::Serialize,
{
    match serde_json::to_string(value) {
        Ok(payload) => json_payload(status, payload),
        Err(err) => {
            tracing::error!(error = %err, "response serialization failed");
            errors_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn json_payload(status: StatusCode, payload: String) -> Response<Full<Bytes>> {
    let built = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(payload)));
    match built {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "failed to build response");
            let mut fallback = Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

fn no_content() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::NO_CONTENT;
    response
}

fn not_found() -> Response<Full<Bytes>> {
    errors_response(StatusCode::NOT_FOUND, "Not found")
}

fn todo_not_found() -> Response<Full<Bytes>> {
    errors_response(StatusCode::NOT_FOUND, "Todo not found")
}

/// Response for requests whose body could not be read or parsed.
pub(crate) fn invalid_body() -> Response<Full<Bytes>> {
    errors_response(StatusCode::BAD_REQUEST, "Invalid request body")
}
