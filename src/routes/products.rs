use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::config::ServerConfig;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::{AdminKeyQuery, error_response};
use crate::services::products::{
    ProductsQuery, create_product, get_product, list_products, remove_product, update_product,
};

#[get("/products")]
pub async fn show_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_products(repo.get_ref(), params.into_inner()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(&err),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match get_product(repo.get_ref(), product_id) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}

#[post("/products")]
pub async fn add_product(
    params: web::Query<AdminKeyQuery>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match create_product(
        repo.get_ref(),
        config.get_ref(),
        params.key.as_deref(),
        form.into_inner(),
    ) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}

#[put("/products/{product_id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    params: web::Query<AdminKeyQuery>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();

    match update_product(
        repo.get_ref(),
        config.get_ref(),
        params.key.as_deref(),
        product_id,
        form.into_inner(),
    ) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    params: web::Query<AdminKeyQuery>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let product_id = path.into_inner();

    match remove_product(
        repo.get_ref(),
        config.get_ref(),
        params.key.as_deref(),
        product_id,
    ) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
