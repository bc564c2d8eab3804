use crate::app::{CategoryService, ToDoService};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

/// Shared by every handler. Holds no mutable state: each request opens its own session.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub categories: CategoryService,
    pub todos: ToDoService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            categories: CategoryService::new(pool.clone()),
            todos: ToDoService::new(pool.clone()),
            pool,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
