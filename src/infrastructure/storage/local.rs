//! Filesystem-backed blob store for article images.
//!
//! Objects live flat under `{root}/images/{name}`, mirroring a public disk
//! that a web server or the `/storage/images` route can expose directly.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::BlobStore,
};
use crate::domain::article::ImageName;

const IMAGES_DIR: &str = "images";

#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    images_dir: PathBuf,
}

impl LocalBlobStore {
    /// `root` is the storage root; images are kept in its `images/` subdirectory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: root.into().join(IMAGES_DIR),
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Create the images directory up front so the first upload cannot race it.
    pub async fn ensure_ready(&self) -> ApplicationResult<()> {
        fs::create_dir_all(&self.images_dir).await.map_err(|err| {
            ApplicationError::storage(format!(
                "failed to create image directory {}: {err}",
                self.images_dir.display()
            ))
        })
    }

    fn path_for(&self, name: &ImageName) -> PathBuf {
        self.images_dir.join(name.as_str())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, name: &ImageName, bytes: Bytes) -> ApplicationResult<()> {
        self.ensure_ready().await?;
        let path = self.path_for(name);
        fs::write(&path, &bytes).await.map_err(|err| {
            ApplicationError::storage(format!("failed to write {}: {err}", path.display()))
        })
    }

    async fn delete(&self, name: &ImageName) -> ApplicationResult<bool> {
        let path = self.path_for(name);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(ApplicationError::storage(format!(
                "failed to delete {}: {err}",
                path.display()
            ))),
        }
    }

    async fn get(&self, name: &ImageName) -> ApplicationResult<Option<Bytes>> {
        let path = self.path_for(name);
        match fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ApplicationError::storage(format!(
                "failed to read {}: {err}",
                path.display()
            ))),
        }
    }
}
