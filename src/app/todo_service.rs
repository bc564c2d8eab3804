//! ToDo Resource Manager.

use crate::domain::model::{ToDoFields, ToDoItem, ToDoView};
use crate::error::{AppError, AppResult};
use crate::storage::Session;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ToDoService {
    pool: PgPool,
}

impl ToDoService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All items with their category joined inline. An empty store is `NotFound`.
    pub async fn list(&self) -> AppResult<Vec<ToDoView>> {
        let mut session = Session::begin(&self.pool).await?;
        let todos = session.list_todos().await?;
        tracing::debug!(count = todos.len(), "listed todos");
        if todos.is_empty() {
            return Err(AppError::NotFound);
        }
        Ok(todos)
    }

    pub async fn get(&self, id: i32) -> AppResult<ToDoView> {
        let mut session = Session::begin(&self.pool).await?;
        let todo = session.find_todo(id).await?;
        tracing::debug!(todo_id = id, found = todo.is_some(), "get todo");
        todo.ok_or(AppError::NotFound)
    }

    /// Inserts the item, category reference included, and returns the stored record.
    pub async fn create(&self, fields: ToDoFields) -> AppResult<ToDoItem> {
        tracing::debug!(category_id = ?fields.category_id, "create todo");
        let mut session = Session::begin(&self.pool).await?;
        let item = session.insert_todo(&fields).await?;
        session.save().await?;
        tracing::info!(todo_id = item.todo_id, category_id = ?item.category_id, "created todo");
        Ok(item)
    }

    pub async fn update(&self, id: i32, fields: ToDoFields) -> AppResult<()> {
        tracing::debug!(todo_id = id, "update todo");
        let mut session = Session::begin(&self.pool).await?;
        if !session.update_todo(id, &fields).await? {
            return Err(AppError::NotFound);
        }
        session.save().await?;
        tracing::info!(todo_id = id, "updated todo");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        tracing::debug!(todo_id = id, "delete todo");
        let mut session = Session::begin(&self.pool).await?;
        if !session.delete_todo(id).await? {
            return Err(AppError::NotFound);
        }
        session.save().await?;
        tracing::info!(todo_id = id, "deleted todo");
        Ok(())
    }
}
