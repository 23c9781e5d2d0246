use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::product_image::NewProductImage;
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 100;

/// Maximum allowed length for a product description.
const DESCRIPTION_MAX_LEN: u64 = 300;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The provided description is empty after sanitization.
    #[error("product description cannot be empty")]
    EmptyDescription,
}

/// A single image reference supplied with a product payload.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductImageForm {
    #[validate(url)]
    pub url: String,
}

/// JSON payload accepted when creating a product.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub discount: i32,
    pub category_id: i32,
    #[serde(default)]
    pub tags: Vec<i32>,
    #[validate(nested)]
    #[serde(default)]
    pub images: Vec<ProductImageForm>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let sanitized_description = sanitize_multiline_text(&self.description);
        if sanitized_description.is_empty() {
            return Err(ProductFormError::EmptyDescription);
        }

        let images = self
            .images
            .into_iter()
            .map(|image| NewProductImage::new(image.url))
            .collect();

        Ok(
            NewProduct::new(sanitized_name, sanitized_description, self.price, self.category_id)
                .with_discount(self.discount)
                .with_tags(self.tags)
                .with_images(images),
        )
    }
}

/// JSON payload accepted when updating a product.
///
/// Scalar fields are required and always overwrite the stored values.
/// `tags` and `images` are optional: an absent field leaves the current
/// relations untouched, an empty list clears them.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub discount: i32,
    pub category_id: i32,
    #[serde(default)]
    pub tags: Option<Vec<i32>>,
    #[validate(nested)]
    #[serde(default)]
    pub images: Option<Vec<ProductImageForm>>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let sanitized_description = sanitize_multiline_text(&self.description);
        if sanitized_description.is_empty() {
            return Err(ProductFormError::EmptyDescription);
        }

        let mut updates = UpdateProduct::new(
            sanitized_name,
            sanitized_description,
            self.price,
            self.discount,
            self.category_id,
        );

        if let Some(tags) = self.tags {
            updates = updates.tags(tags);
        }

        if let Some(images) = self.images {
            updates = updates.images(
                images
                    .into_iter()
                    .map(|image| NewProductImage::new(image.url))
                    .collect(),
            );
        }

        Ok(updates)
    }
}
