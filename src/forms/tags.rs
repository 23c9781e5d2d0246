use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::NewTag;
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a tag name.
const NAME_MAX_LEN: u64 = 50;

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag payloads.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("tag name cannot be empty")]
    EmptyName,
}

/// JSON payload accepted when creating a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTagForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(TagFormError::EmptyName);
        }

        Ok(NewTag::new(sanitized_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tag_form_sanitizes_name() {
        let form = AddTagForm {
            name: " Gold  Plated ".to_string(),
        };

        let new_tag = form.into_new_tag().expect("expected success");

        assert_eq!(new_tag.name, "Gold Plated");
    }

    #[test]
    fn add_tag_form_rejects_blank_name() {
        let form = AddTagForm {
            name: " \t ".to_string(),
        };

        let result = form.into_new_tag();

        assert!(matches!(result, Err(TagFormError::EmptyName)));
    }
}
