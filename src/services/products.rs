use crate::config::ServerConfig;
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{CategoryReader, ProductReader, ProductWriter, TagReader};
use crate::services::{ServiceError, ServiceResult, validation};

/// Query parameters accepted by the product listing.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ProductsQuery {
    /// Number of leading products to skip.
    pub skip: Option<i64>,
    /// Maximum number of products to return.
    pub limit: Option<i64>,
}

/// Returns a window of the product list in id order.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let mut list_query = ProductListQuery::new();
    if let Some(skip) = query.skip {
        list_query = list_query.skip(skip);
    }
    if let Some(limit) = query.limit {
        list_query = list_query.limit(limit);
    }

    repo.list_products(list_query).map_err(ServiceError::from)
}

/// Returns a single product with its category, tags, and images resolved.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a product after validating its category and tag references.
///
/// Validation runs before any row is written, and the repository persists
/// the product with its relations in one transaction, so a failed create
/// leaves no partial product behind.
pub fn create_product<R>(
    repo: &R,
    config: &ServerConfig,
    credential: Option<&str>,
    form: AddProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + CategoryReader + TagReader + ?Sized,
{
    if !config.is_authorized(credential) {
        return Err(ServiceError::Unauthorized);
    }

    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    validation::ensure_category_exists(repo, new_product.category_id)?;
    validation::ensure_tags_exist(repo, &new_product.tag_ids)?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Overwrites a product's scalar fields and optionally replaces its tag
/// and image lists wholesale.
pub fn update_product<R>(
    repo: &R,
    config: &ServerConfig,
    credential: Option<&str>,
    product_id: i32,
    form: EditProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + CategoryReader + TagReader + ?Sized,
{
    if !config.is_authorized(credential) {
        return Err(ServiceError::Unauthorized);
    }

    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    validation::ensure_category_exists(repo, updates.category_id)?;
    if let Some(tag_ids) = &updates.tag_ids {
        validation::ensure_tags_exist(repo, tag_ids)?;
    }

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a product together with its images and tag associations.
pub fn remove_product<R>(
    repo: &R,
    config: &ServerConfig,
    credential: Option<&str>,
    product_id: i32,
) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    if !config.is_authorized(credential) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_product(product_id).map_err(ServiceError::from)
}
