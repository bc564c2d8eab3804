use crate::domain::model::{Category, CategoryInput, ToDoInput, ToDoItem, ToDoView};
use crate::error::ErrorResponse;
use crate::transport::http::handlers::{categories, health, todos};
use crate::transport::http::types::{AppState, HealthResponse};
use axum::routing::get;
use axum::Router;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        categories::list_categories_handler,
        categories::get_category_handler,
        categories::create_category_handler,
        categories::update_category_handler,
        categories::delete_category_handler,
        todos::list_todos_handler,
        todos::get_todo_handler,
        todos::create_todo_handler,
        todos::update_todo_handler,
        todos::delete_todo_handler
    ),
    components(schemas(
        Category,
        CategoryInput,
        ToDoItem,
        ToDoView,
        ToDoInput,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/categories",
            get(categories::list_categories_handler)
                .post(categories::create_category_handler)
                .put(categories::update_category_handler),
        )
        .route(
            "/categories/:id",
            get(categories::get_category_handler).delete(categories::delete_category_handler),
        )
        .route(
            "/todos",
            get(todos::list_todos_handler)
                .post(todos::create_todo_handler)
                .put(todos::update_todo_handler),
        )
        .route(
            "/todos/:id",
            get(todos::get_todo_handler).delete(todos::delete_todo_handler),
        )
        .with_state(app_state)
}

/// The full application: routes, Swagger UI, request timeout, request tracing and one
/// permissive CORS policy over every route.
pub fn build_app(app_state: AppState, request_timeout: Duration) -> Router {
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
