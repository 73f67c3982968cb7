//! Photo storage — external blob store behind a trait seam.
//!
//! DESIGN
//! ======
//! Profiles reference photographs by public URL only; the store is an
//! external collaborator. `DiskPhotoStore` keeps the service self-contained:
//! random-hex filenames under a configured directory, served statically at
//! `/photos/`. `remove` exists as the compensation hook for uploads orphaned
//! by a failed insert.

use std::path::PathBuf;

use async_trait::async_trait;

pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// URL prefix the router serves the photo directory under.
pub const PUBLIC_PREFIX: &str = "/photos/";

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("unsupported photo extension: {0}")]
    UnsupportedExtension(String),
    #[error("photo url not managed by this store: {0}")]
    ForeignUrl(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Store one photo and return its public URL.
    async fn store(&self, ext: &str, bytes: &[u8]) -> Result<String, PhotoError>;

    /// Remove a previously stored photo by its public URL.
    async fn remove(&self, url: &str) -> Result<(), PhotoError>;
}

pub struct DiskPhotoStore {
    root: PathBuf,
}

impl DiskPhotoStore {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

fn normalize_extension(ext: &str) -> Result<String, PhotoError> {
    let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(PhotoError::UnsupportedExtension(ext))
    }
}

#[async_trait]
impl PhotoStore for DiskPhotoStore {
    async fn store(&self, ext: &str, bytes: &[u8]) -> Result<String, PhotoError> {
        let ext = normalize_extension(ext)?;
        let filename = format!("{:032x}.{ext}", rand::random::<u128>());

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&filename), bytes).await?;

        Ok(format!("{PUBLIC_PREFIX}{filename}"))
    }

    async fn remove(&self, url: &str) -> Result<(), PhotoError> {
        let filename = url
            .strip_prefix(PUBLIC_PREFIX)
            .filter(|name| !name.is_empty() && !name.contains('/') && !name.contains('\\'))
            .ok_or_else(|| PhotoError::ForeignUrl(url.to_owned()))?;

        tokio::fs::remove_file(self.root.join(filename)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "photos_test.rs"]
mod tests;
