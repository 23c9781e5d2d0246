use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::product_image::{NewProductImage, ProductImage};
use crate::domain::tag::Tag;

/// Number of products returned by a listing when no limit is given.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Domain representation of a catalog product with its relations resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to buyers.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Discount percentage applied to the price.
    pub discount: i32,
    /// Identifier of the category the product belongs to.
    pub category_id: i32,
    /// The resolved category record.
    pub category: Category,
    /// Tags attached to the product, ordered by tag id.
    pub tags: Vec<Tag>,
    /// Images owned by the product, in insertion order.
    pub images: Vec<ProductImage>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product together with its relations.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to buyers.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Discount percentage applied to the price.
    pub discount: i32,
    /// Identifier of an existing category.
    pub category_id: i32,
    /// Identifiers of existing tags to attach.
    pub tag_ids: Vec<i32>,
    /// Images to create for the product, in order.
    pub images: Vec<NewProductImage>,
}

impl NewProduct {
    /// Build a new product payload with no tags or images attached yet.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category_id: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            discount: 0,
            category_id,
            tag_ids: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, discount: i32) -> Self {
        self.discount = discount;
        self
    }

    /// Attach tag identifiers to the payload.
    pub fn with_tags(mut self, tag_ids: Vec<i32>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    /// Attach image payloads to the product.
    pub fn with_images(mut self, images: Vec<NewProductImage>) -> Self {
        self.images = images;
        self
    }
}

/// Full-replace update applied to an existing product.
///
/// Scalar fields are always overwritten. `tag_ids` and `images` distinguish
/// "replace with this list" (`Some`, where an empty list clears) from
/// "leave unchanged" (`None`).
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub discount: i32,
    pub category_id: i32,
    /// Replacement tag set, or `None` to keep the current associations.
    pub tag_ids: Option<Vec<i32>>,
    /// Replacement image list, or `None` to keep the current images.
    pub images: Option<Vec<NewProductImage>>,
    /// Timestamp captured when the update payload was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateProduct {
    /// Build an update that overwrites the scalar fields and leaves tags
    /// and images untouched.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        discount: i32,
        category_id: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            discount,
            category_id,
            tag_ids: None,
            images: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Replace the product's tag set wholesale.
    pub fn tags(mut self, tag_ids: Vec<i32>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    /// Replace the product's image list wholesale.
    pub fn images(mut self, images: Vec<NewProductImage>) -> Self {
        self.images = Some(images);
        self
    }
}

/// Offset/limit window over the product listing, in id order.
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    /// Number of leading products to skip.
    pub skip: i64,
    /// Maximum number of products to return.
    pub limit: i64,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Skip the first `skip` products; negative values are treated as zero.
    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = skip.max(0);
        self
    }

    /// Cap the number of returned products; values below one are raised to one.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit.max(1);
        self
    }
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self::new()
    }
}
