//! # Upload File Store
//!
//! Streams the multipart `image` part of a create request to the upload
//! directory and serves the stored files back under `/uploads`.
//!
//! Files are named `<epochMillis>_<originalName>`. Two uploads of the same name
//! within the same millisecond map to the same file and the last write wins.
//! There is no size limit and no content-type check.

use actix_files::Files;
use actix_multipart::{Field, MultipartError};
use chrono::Utc;
use common::model::image::UploadedImage;
use futures_util::StreamExt;
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Path the upload directory is mounted at.
pub const PUBLIC_PATH: &str = "/uploads";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to write upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Unexpected field \"{0}\"")]
    UnexpectedField(String),

    #[error("invalid upload filename \"{0}\"")]
    InvalidFilename(String),
}

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Uses `dir` as upload directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the content of `field` to a new file and returns its metadata.
    ///
    /// `original_name` is the filename the client sent; only its last path
    /// component is used on disk.
    pub async fn save(
        &self,
        field: &mut Field,
        original_name: &str,
    ) -> Result<UploadedImage, UploadError> {
        let filename = stored_filename(Utc::now().timestamp_millis(), original_name)?;
        let path = self.dir.join(&filename);

        let mut file = File::create(&path).await?;
        let mut written = 0usize;
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            written += chunk.len();
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        debug!("Stored upload {} ({} bytes)", path.display(), written);

        Ok(UploadedImage {
            filename,
            path: path.to_string_lossy().into_owned(),
            original_name: original_name.to_string(),
        })
    }

    /// Static file service for `GET /uploads/{filename}`. Unknown files are 404.
    pub fn service(&self) -> Files {
        Files::new(PUBLIC_PATH, &self.dir)
    }
}

/// Builds the on-disk name `<timestamp>_<basename>` for an upload.
pub fn stored_filename(timestamp_millis: i64, original_name: &str) -> Result<String, UploadError> {
    let basename = Path::new(original_name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| UploadError::InvalidFilename(original_name.to_string()))?;

    Ok(format!("{}_{}", timestamp_millis, basename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_prefixed_with_timestamp() {
        assert_eq!(
            stored_filename(1700000000000, "avatar.png").unwrap(),
            "1700000000000_avatar.png"
        );
    }

    #[test]
    fn filename_drops_directory_components() {
        assert_eq!(
            stored_filename(1, "../../etc/passwd").unwrap(),
            "1_passwd"
        );
    }

    #[test]
    fn filename_without_basename_is_rejected() {
        assert!(matches!(
            stored_filename(1, ".."),
            Err(UploadError::InvalidFilename(_))
        ));
    }

    #[test]
    fn open_creates_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("uploads");
        let store = FileStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
    }
}
