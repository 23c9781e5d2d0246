use serde::{Deserialize, Serialize};

/// Domain representation of an image owned by a single product.
///
/// Images have no lifecycle of their own; they are created and destroyed
/// only as part of product create/update/delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Unique identifier of the image record.
    pub id: i32,
    /// Identifier of the owning product.
    pub product_id: i32,
    /// Public URL where the image bytes are served from.
    pub url: String,
}

/// Payload carrying the URL of an image to attach to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProductImage {
    /// Public URL of the image.
    pub url: String,
}

impl NewProductImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
