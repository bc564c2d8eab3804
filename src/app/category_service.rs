//! Category Resource Manager.

use crate::domain::model::{Category, CategoryFields, CategoryInput};
use crate::error::{AppError, AppResult};
use crate::storage::Session;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All categories by id. An empty store is reported as `NotFound`, not as an empty list.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let mut session = Session::begin(&self.pool).await?;
        let categories = session.list_categories().await?;
        tracing::debug!(count = categories.len(), "listed categories");
        if categories.is_empty() {
            return Err(AppError::NotFound);
        }
        Ok(categories)
    }

    pub async fn get(&self, id: i32) -> AppResult<Category> {
        let mut session = Session::begin(&self.pool).await?;
        let category = session.find_category(id).await?;
        tracing::debug!(category_id = id, found = category.is_some(), "get category");
        category.ok_or(AppError::NotFound)
    }

    /// Inserts the checked fields and echoes the payload back with the id the store assigned.
    pub async fn create(
        &self,
        input: CategoryInput,
        fields: CategoryFields,
    ) -> AppResult<CategoryInput> {
        tracing::debug!(name = %fields.name, "create category");
        let mut session = Session::begin(&self.pool).await?;
        let category_id = session.insert_category(&fields).await?;
        session.save().await?;
        tracing::info!(category_id, "created category");
        Ok(CategoryInput {
            category_id,
            ..input
        })
    }

    /// Full-record overwrite of the category named by `id`. Last writer wins.
    pub async fn update(&self, id: i32, fields: CategoryFields) -> AppResult<()> {
        tracing::debug!(category_id = id, "update category");
        let mut session = Session::begin(&self.pool).await?;
        if !session.update_category(id, &fields).await? {
            return Err(AppError::NotFound);
        }
        session.save().await?;
        tracing::info!(category_id = id, "updated category");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        tracing::debug!(category_id = id, "delete category");
        let mut session = Session::begin(&self.pool).await?;
        if !session.delete_category(id).await? {
            return Err(AppError::NotFound);
        }
        session.save().await?;
        tracing::info!(category_id = id, "deleted category");
        Ok(())
    }
}
