use crate::domain::model::{ToDoInput, ToDoItem, ToDoView};
use crate::error::AppResult;
use crate::transport::http::handlers::common::{validated, Id};
use crate::transport::http::types::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All items, each with its category (null if none)", body = [ToDoView]),
        (status = 404, description = "No items exist"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_todos_handler(State(state): State<AppState>) -> AppResult<Json<Vec<ToDoView>>> {
    Ok(Json(state.todos.list().await?))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = i32, Path, description = "ToDo id")),
    responses(
        (status = 200, description = "The item with its category", body = ToDoView),
        (status = 404, description = "No such item"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_todo_handler(
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<Json<ToDoView>> {
    Ok(Json(state.todos.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body = ToDoInput,
    responses(
        (status = 200, description = "The stored record", body = ToDoItem),
        (status = 400, description = "Invalid Data or unknown category", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_todo_handler(
    State(state): State<AppState>,
    request: Result<Json<ToDoInput>, JsonRejection>,
) -> AppResult<Json<ToDoItem>> {
    let (_, fields) = validated(request)?;
    Ok(Json(state.todos.create(fields).await?))
}

#[utoipa::path(
    put,
    path = "/todos",
    request_body = ToDoInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Invalid Data or unknown category", body = crate::error::ErrorResponse),
        (status = 404, description = "No such item"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_todo_handler(
    State(state): State<AppState>,
    request: Result<Json<ToDoInput>, JsonRejection>,
) -> AppResult<StatusCode> {
    let (input, fields) = validated(request)?;
    state.todos.update(input.todo_id, fields).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i32, Path, description = "ToDo id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No such item"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<StatusCode> {
    state.todos.delete(id).await?;
    Ok(StatusCode::OK)
}
