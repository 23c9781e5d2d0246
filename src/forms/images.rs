use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use thiserror::Error;

use crate::services::images::ImageUpload;

#[derive(MultipartForm)]
/// Multipart form carrying a single image file to upload.
pub struct UploadImageForm {
    #[multipart(limit = "10MB")]
    /// The uploaded image file.
    pub file: TempFile,
}

#[derive(Debug, Error)]
/// Errors that can occur while reading an uploaded image file.
pub enum UploadImageFormError {
    #[error("error reading uploaded file")]
    FileReadError,
}

impl From<std::io::Error> for UploadImageFormError {
    fn from(_: std::io::Error) -> Self {
        UploadImageFormError::FileReadError
    }
}

impl UploadImageForm {
    /// Drain the temp file into an [`ImageUpload`] for the service layer.
    pub fn into_image_upload(mut self) -> Result<ImageUpload, UploadImageFormError> {
        self.file.file.rewind()?;
        let mut bytes = Vec::with_capacity(self.file.size);
        self.file.file.read_to_end(&mut bytes)?;

        Ok(ImageUpload {
            file_name: self.file.file_name,
            content_type: self
                .file
                .content_type
                .map(|mime| mime.essence_str().to_string()),
            bytes,
        })
    }
}
