use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

pub mod categories;
pub mod images;
pub mod products;
pub mod tags;

/// Query parameter carrying the admin credential for mutating endpoints.
#[derive(Debug, Deserialize)]
pub struct AdminKeyQuery {
    pub key: Option<String>,
}

/// JSON error payload returned for every failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl ErrorBody {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Maps a service failure to its HTTP response.
pub(crate) fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorBody::new("invalid or missing credential"))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody::new("not found")),
        ServiceError::DuplicateName(_) => {
            HttpResponse::Conflict().json(ErrorBody::new(err.to_string()))
        }
        ServiceError::MissingReference(_) | ServiceError::Form(_) => {
            HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()))
        }
        ServiceError::UnsupportedMedia(_) => {
            HttpResponse::UnsupportedMediaType().json(ErrorBody::new(err.to_string()))
        }
        ServiceError::Storage(_) | ServiceError::Internal(_) => {
            log::error!("Request failed: {err}");
            HttpResponse::InternalServerError().json(ErrorBody::new("internal server error"))
        }
    }
}
