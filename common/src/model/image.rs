use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of a file written to the upload directory, before it is attached
/// to a record.
///
/// Produced by the backend file store once the multipart `image` field has been
/// fully streamed to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Generated on-disk name, `<epochMillis>_<originalName>`.
    pub filename: String,
    /// Location of the file, relative to the working directory when the upload
    /// directory is relative (e.g. `uploads/1700000000000_avatar.png`).
    pub path: String,
    /// The filename as sent by the client.
    pub original_name: String,
}

/// The image sub-document stored inside an `AddressRecord`.
///
/// Either every field is present or the whole sub-document is absent from the
/// record; there is no partially populated state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMeta {
    pub filename: String,
    pub path: String,
    #[serde(rename = "originalName", alias = "originalname")]
    pub original_name: String,
    /// Set to the creation time of the owning record.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ImageMeta {
    pub fn from_upload(upload: UploadedImage, created_at: DateTime<Utc>) -> Self {
        Self {
            filename: upload.filename,
            path: upload.path,
            original_name: upload.original_name,
            created_at,
        }
    }
}
