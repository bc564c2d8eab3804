use super::{check_max_chars, check_no_nul, required, Validate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NAME_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// Category as stored and as projected in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Category payload accepted by create and update.
///
/// `category_id` is ignored on create (the store assigns identity) and selects the record on
/// update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryInput {
    #[serde(default)]
    pub category_id: i32,
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Checked fields written by insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFields {
    pub name: String,
    pub description: Option<String>,
}

impl Validate for CategoryInput {
    type Fields = CategoryFields;

    fn validate(&self) -> Result<CategoryFields, Vec<String>> {
        let mut errors = Vec::new();
        let name = required(self.name.as_deref(), "Name", &mut errors);
        if let Some(name) = name {
            check_max_chars(name, NAME_MAX_CHARS, &mut errors);
            check_no_nul(name, "Name", &mut errors);
        }
        if let Some(description) = self.description.as_deref() {
            check_max_chars(description, DESCRIPTION_MAX_CHARS, &mut errors);
            check_no_nul(description, "Description", &mut errors);
        }

        match name {
            Some(name) if errors.is_empty() => Ok(CategoryFields {
                name: name.to_string(),
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}
