use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a category name.
const NAME_MAX_LEN: u64 = 50;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// JSON payload accepted when creating a category.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(NewCategory::new(sanitized_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_category_form_sanitizes_name() {
        let form = AddCategoryForm {
            name: "  Wedding   Rings ".to_string(),
        };

        let new_category = form.into_new_category().expect("expected success");

        assert_eq!(new_category.name, "Wedding Rings");
    }

    #[test]
    fn add_category_form_rejects_blank_name() {
        let form = AddCategoryForm {
            name: "   ".to_string(),
        };

        let result = form.into_new_category();

        assert!(matches!(result, Err(CategoryFormError::EmptyName)));
    }

    #[test]
    fn add_category_form_rejects_overlong_name() {
        let form = AddCategoryForm {
            name: "x".repeat(51),
        };

        let result = form.into_new_category();

        assert!(matches!(result, Err(CategoryFormError::Validation(_))));
    }
}
