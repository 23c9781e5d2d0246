use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, post, web};
use serde::Serialize;

use crate::config::ServerConfig;
use crate::forms::images::UploadImageForm;
use crate::routes::{AdminKeyQuery, error_response};
use crate::services::ServiceError;
use crate::services::images::upload_image;
use crate::storage::ImageStore;

/// JSON payload returned after a successful upload.
#[derive(Debug, Serialize)]
struct UploadedImage {
    url: String,
}

#[post("/upload-image")]
pub async fn upload(
    params: web::Query<AdminKeyQuery>,
    config: web::Data<ServerConfig>,
    store: web::Data<dyn ImageStore>,
    MultipartForm(form): MultipartForm<UploadImageForm>,
) -> impl Responder {
    // Reject bad credentials before draining the uploaded file into memory.
    if !config.is_authorized(params.key.as_deref()) {
        return error_response(&ServiceError::Unauthorized);
    }

    let image = match form.into_image_upload() {
        Ok(image) => image,
        Err(err) => {
            log::error!("Failed to read uploaded image: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match upload_image(
        store.get_ref(),
        config.get_ref(),
        params.key.as_deref(),
        image,
    ) {
        Ok(url) => HttpResponse::Ok().json(UploadedImage { url }),
        Err(err) => error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use crate::storage::StorageError;

    struct RejectingStore;

    impl ImageStore for RejectingStore {
        fn put(&self, _: &str, _: &str, _: &[u8]) -> Result<String, StorageError> {
            panic!("store must not be reached without a valid credential");
        }
    }

    fn multipart_body(boundary: &str) -> String {
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"ring.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             pngbytes\r\n\
             --{boundary}--\r\n"
        )
    }

    #[actix_web::test]
    async fn upload_without_key_is_rejected_before_the_file_is_read() {
        let store: Arc<dyn ImageStore> = Arc::new(RejectingStore);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ServerConfig::new("secret")))
                .app_data(web::Data::from(store))
                .service(upload),
        )
        .await;

        let boundary = "ringsboundary";
        let request = test::TestRequest::post()
            .uri("/upload-image")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(multipart_body(boundary))
            .to_request();

        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
