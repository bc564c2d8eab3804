use super::Session;
use crate::domain::model::{Category, CategoryFields};

impl Session {
    pub async fn list_categories(&mut self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT category_id, name, description FROM categories ORDER BY category_id",
        )
        .fetch_all(self.conn())
        .await
    }

    pub async fn find_category(&mut self, id: i32) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT category_id, name, description FROM categories WHERE category_id = $1",
        )
        .bind(id)
        .fetch_optional(self.conn())
        .await
    }

    /// Inserts a category and returns the identity assigned by the store.
    pub async fn insert_category(&mut self, fields: &CategoryFields) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING category_id",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .fetch_one(self.conn())
        .await
    }

    /// Overwrites name and description. Returns `false` when no such category exists.
    pub async fn update_category(
        &mut self,
        id: i32,
        fields: &CategoryFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE categories SET name = $1, description = $2 WHERE category_id = $3",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(id)
        .execute(self.conn())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Items referencing the category are detached by the `ON DELETE SET NULL` constraint.
    pub async fn delete_category(&mut self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(self.conn())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
