use crate::domain::model::{Category, CategoryInput};
use crate::error::AppResult;
use crate::transport::http::handlers::common::{validated, Id};
use crate::transport::http::types::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = [Category]),
        (status = 404, description = "No categories exist"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.categories.list().await?))
}

#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 404, description = "No such category"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_category_handler(
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<Json<Category>> {
    Ok(Json(state.categories.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/categories",
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Created; payload echoed with the assigned id", body = CategoryInput),
        (status = 400, description = "Invalid Data", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    request: Result<Json<CategoryInput>, JsonRejection>,
) -> AppResult<Json<CategoryInput>> {
    let (input, fields) = validated(request)?;
    Ok(Json(state.categories.create(input, fields).await?))
}

#[utoipa::path(
    put,
    path = "/categories",
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Invalid Data", body = crate::error::ErrorResponse),
        (status = 404, description = "No such category"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_category_handler(
    State(state): State<AppState>,
    request: Result<Json<CategoryInput>, JsonRejection>,
) -> AppResult<StatusCode> {
    let (input, fields) = validated(request)?;
    state.categories.update(input.category_id, fields).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Deleted; its todo items are detached"),
        (status = 404, description = "No such category"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_category_handler(
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<StatusCode> {
    state.categories.delete(id).await?;
    Ok(StatusCode::OK)
}
