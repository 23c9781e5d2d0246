use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::categories::AddCategoryForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories::{create_category, list_categories, remove_category};

#[get("/categories")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(&err),
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCategoryForm>,
) -> impl Responder {
    match create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(&err),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match remove_category(repo.get_ref(), category_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
