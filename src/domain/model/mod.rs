//! Records, view models and the field constraints applied to incoming payloads.

pub mod category;
pub mod todo;

pub use category::{Category, CategoryFields, CategoryInput};
pub use todo::{ToDoFields, ToDoInput, ToDoItem, ToDoView};

/// Contract for any view model accepted over HTTP.
///
/// Validation runs before a persistence session is opened, so a rejected payload never
/// touches the store. On success it yields the checked fields that storage writes.
pub trait Validate {
    type Fields;

    /// Returns the checked fields, or every field-level message that applies.
    fn validate(&self) -> Result<Self::Fields, Vec<String>>;
}

/// Pushes a message when `value` is longer than `max` characters.
pub(crate) fn check_max_chars(value: &str, max: usize, errors: &mut Vec<String>) {
    if value.chars().count() > max {
        errors.push(format!("Max {} Characters", max));
    }
}

/// PostgreSQL text columns cannot hold U+0000.
pub(crate) fn check_no_nul(value: &str, field: &str, errors: &mut Vec<String>) {
    if value.contains('\0') {
        errors.push(format!("{} must not contain NUL characters", field));
    }
}

/// A required string is present and not blank.
pub(crate) fn required<'a>(
    value: Option<&'a str>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.push(format!("{} is required", field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let mut errors = Vec::new();
        check_max_chars(&"é".repeat(50), 50, &mut errors);
        assert!(errors.is_empty());
        check_max_chars(&"é".repeat(51), 50, &mut errors);
        assert_eq!(errors, vec!["Max 50 Characters".to_string()]);
    }

    #[test]
    fn nul_is_reported_with_the_field_name() {
        let mut errors = Vec::new();
        check_no_nul("Wo\0rk", "Name", &mut errors);
        check_no_nul("Work", "Name", &mut errors);
        assert_eq!(errors, vec!["Name must not contain NUL characters".to_string()]);
    }

    #[test]
    fn blank_is_not_present() {
        let mut errors = Vec::new();
        assert_eq!(required(Some("   "), "Name", &mut errors), None);
        assert_eq!(required(None, "Name", &mut errors), None);
        assert_eq!(required(Some("x"), "Name", &mut errors), Some("x"));
        assert_eq!(errors.len(), 2);
    }
}
