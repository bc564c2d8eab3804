use super::Session;
use crate::domain::model::todo::ToDoJoinRow;
use crate::domain::model::{ToDoFields, ToDoItem, ToDoView};
use crate::error::AppError;

const SELECT_WITH_CATEGORY: &str = "SELECT t.todo_id, t.action, t.done, c.category_id, \
     c.name AS category_name, c.description AS category_description \
     FROM todo_items t LEFT JOIN categories c ON c.category_id = t.category_id";

impl Session {
    pub async fn list_todos(&mut self) -> Result<Vec<ToDoView>, sqlx::Error> {
        let sql = format!("{} ORDER BY t.todo_id", SELECT_WITH_CATEGORY);
        let rows = sqlx::query_as::<_, ToDoJoinRow>(&sql)
            .fetch_all(self.conn())
            .await?;
        Ok(rows.into_iter().map(ToDoView::from).collect())
    }

    pub async fn find_todo(&mut self, id: i32) -> Result<Option<ToDoView>, sqlx::Error> {
        let sql = format!("{} WHERE t.todo_id = $1", SELECT_WITH_CATEGORY);
        let row = sqlx::query_as::<_, ToDoJoinRow>(&sql)
            .bind(id)
            .fetch_optional(self.conn())
            .await?;
        Ok(row.map(ToDoView::from))
    }

    /// Inserts an item, category reference included, and returns the stored record.
    pub async fn insert_todo(&mut self, fields: &ToDoFields) -> Result<ToDoItem, AppError> {
        sqlx::query_as::<_, ToDoItem>(
            "INSERT INTO todo_items (action, done, category_id) VALUES ($1, $2, $3) \
             RETURNING todo_id, action, done, category_id",
        )
        .bind(&fields.action)
        .bind(fields.done)
        .bind(fields.category_id)
        .fetch_one(self.conn())
        .await
        .map_err(|e| AppError::from_todo_write(e, fields.category_id))
    }

    /// Overwrites action, done and the category reference. Returns `false` when no such item
    /// exists.
    pub async fn update_todo(&mut self, id: i32, fields: &ToDoFields) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE todo_items SET action = $1, done = $2, category_id = $3 WHERE todo_id = $4",
        )
        .bind(&fields.action)
        .bind(fields.done)
        .bind(fields.category_id)
        .bind(id)
        .execute(self.conn())
        .await
        .map_err(|e| AppError::from_todo_write(e, fields.category_id))?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_todo(&mut self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo_items WHERE todo_id = $1")
            .bind(id)
            .execute(self.conn())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
