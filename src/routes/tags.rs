use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::tags::AddTagForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tags::{create_tag, list_tags, remove_tag};

#[get("/tags")]
pub async fn show_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => error_response(&err),
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddTagForm>,
) -> impl Responder {
    match create_tag(repo.get_ref(), form.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => error_response(&err),
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match remove_tag(repo.get_ref(), tag_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
