use super::{check_no_nul, required, Category, Validate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// ToDo item as stored. Returned as-is by create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ToDoItem {
    pub todo_id: i32,
    pub action: String,
    pub done: bool,
    pub category_id: Option<i32>,
}

/// Read projection: the item with its category joined inline.
///
/// `category` is `None` for items without a category, including items whose category was
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ToDoView {
    pub todo_id: i32,
    pub action: String,
    pub done: bool,
    pub category: Option<Category>,
}

/// ToDo payload accepted by create and update.
///
/// `category_id` is persisted on both; update overwrites the full record, so leaving it out
/// detaches the item from its category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ToDoInput {
    #[serde(default)]
    pub todo_id: i32,
    pub action: Option<String>,
    pub done: Option<bool>,
    #[serde(default)]
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoFields {
    pub action: String,
    pub done: bool,
    pub category_id: Option<i32>,
}

impl Validate for ToDoInput {
    type Fields = ToDoFields;

    fn validate(&self) -> Result<ToDoFields, Vec<String>> {
        let mut errors = Vec::new();
        let action = required(self.action.as_deref(), "Action", &mut errors);
        if let Some(action) = action {
            check_no_nul(action, "Action", &mut errors);
        }
        if self.done.is_none() {
            errors.push("Done is required".to_string());
        }

        match (action, self.done) {
            (Some(action), Some(done)) if errors.is_empty() => Ok(ToDoFields {
                action: action.to_string(),
                done,
                category_id: self.category_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Row shape of the item/category left join.
#[derive(Debug, sqlx::FromRow)]
pub struct ToDoJoinRow {
    pub todo_id: i32,
    pub action: String,
    pub done: bool,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub category_description: Option<String>,
}

impl From<ToDoJoinRow> for ToDoView {
    fn from(row: ToDoJoinRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(category_id), Some(name)) => Some(Category {
                category_id,
                name,
                description: row.category_description,
            }),
            _ => None,
        };
        ToDoView {
            todo_id: row.todo_id,
            action: row.action,
            done: row.done,
            category,
        }
    }
}
