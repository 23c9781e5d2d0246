use uuid::Uuid;

use crate::config::ServerConfig;
use crate::services::{ServiceError, ServiceResult};
use crate::storage::ImageStore;

/// File extensions accepted for image uploads.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// An uploaded file as received from the multipart transport.
#[derive(Debug, Default)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Stores an uploaded image under a fresh random object name and returns
/// its public URL.
///
/// The original file name only contributes its extension, which must be on
/// the allow-list, and the declared content type must be an `image/*` type.
pub fn upload_image(
    store: &dyn ImageStore,
    config: &ServerConfig,
    credential: Option<&str>,
    upload: ImageUpload,
) -> ServiceResult<String> {
    if !config.is_authorized(credential) {
        return Err(ServiceError::Unauthorized);
    }

    let content_type = upload.content_type.unwrap_or_default();
    if !content_type.starts_with("image/") {
        return Err(ServiceError::UnsupportedMedia(format!(
            "content type `{content_type}` is not an image"
        )));
    }

    let extension = upload
        .file_name
        .as_deref()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
        .ok_or_else(|| {
            ServiceError::UnsupportedMedia("file name has no extension".to_string())
        })?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ServiceError::UnsupportedMedia(format!(
            "extension `{extension}` is not allowed"
        )));
    }

    let object_name = format!("{}.{}", Uuid::new_v4().simple(), extension);
    let url = store.put(&object_name, &content_type, &upload.bytes)?;

    Ok(url)
}
