use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure reported by an [`ImageStore`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to store object: {0}")]
    Io(#[from] io::Error),
}

/// Opaque object store that keeps uploaded image bytes and hands back a
/// public URL. The catalog core never addresses stored objects again, so
/// `put` is the whole contract.
pub trait ImageStore: Send + Sync {
    fn put(&self, object_name: &str, content_type: &str, bytes: &[u8]) -> Result<String, StorageError>;
}

/// Filesystem-backed store whose directory is served by `actix-files`.
pub struct LocalImageStore {
    root: PathBuf,
    base_url: String,
}

impl LocalImageStore {
    /// Create the store, making sure the target directory exists.
    pub fn new(root: impl AsRef<Path>, base_url: impl Into<String>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { root, base_url })
    }
}

impl ImageStore for LocalImageStore {
    fn put(&self, object_name: &str, _content_type: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let path = self.root.join(object_name);
        fs::write(&path, bytes)?;
        Ok(format!("{}/{}", self.base_url, object_name))
    }
}
